//! Code emission: turns a selection of test cases into source text for the test driver.
//!
//! The selection can be split into parts with a maximum count of cases, each part is emitted on
//! its own (e.g. into its own file).

use crate::header::Header;
use crate::TestCase;
use std::io;
use std::io::Write;
use std::num::NonZero;

pub mod ada;

/// If a selection is emitted in multiple parts: which part this is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Part {
    /// The current part number, 1-based
    pub current: usize,
    /// How many parts there are
    pub count: usize,
}

/// Everything an [Emitter] gets to generate one output.
#[derive(Copy, Clone, Debug)]
pub struct EmitRequest<'a> {
    /// Header of the export the cases come from.
    pub header: &'a Header,
    /// The cases to emit, never empty.
    pub cases: &'a [TestCase],
    /// Which part of the selection `cases` is.
    pub part: Part,
}

impl EmitRequest<'_> {
    /// The case number of the first case in this request.
    pub fn first_case(&self) -> usize {
        self.cases.first().map_or(0, TestCase::number)
    }

    /// The case number of the last case in this request.
    pub fn last_case(&self) -> usize {
        self.cases.last().map_or(0, TestCase::number)
    }
}

/// Generates source text for a selection of test cases.
pub trait Emitter {
    /// Write the generated source for the request to `out`.
    fn emit<W: Write>(&self, request: &EmitRequest<'_>, out: &mut W) -> io::Result<()>;
}

/// Split the selected cases into parts of at most `max_cases` cases each. Without a maximum,
/// everything is one part. An empty selection gives no parts at all.
pub fn split_into_parts<'a>(
    header: &'a Header,
    cases: &'a [TestCase],
    max_cases: Option<NonZero<usize>>,
) -> Vec<EmitRequest<'a>> {
    if cases.is_empty() {
        return Vec::new();
    }

    let chunk_size = max_cases.map_or(cases.len(), NonZero::get);
    let count = cases.len().div_ceil(chunk_size);

    cases
        .chunks(chunk_size)
        .enumerate()
        .map(|(idx, cases)| EmitRequest {
            header,
            cases,
            part: Part {
                current: idx + 1,
                count,
            },
        })
        .collect()
}
