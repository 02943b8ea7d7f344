//! Interactive selection of the test case range.

use std::io;
use std::io::{BufRead, Write};
use told_lib::CaseRange;

/// Ask for the range of test cases to generate, until a valid answer is given.
///
/// An empty answer or the end of the input selects all `available` test cases.
/// `available` must not be zero.
pub fn prompt_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    available: usize,
) -> io::Result<CaseRange> {
    let all = CaseRange::all(available)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no test cases to select"))?;

    let mut answer = String::new();

    loop {
        write!(
            output,
            "Enter the test cases to generate ({all}, empty for all {available}): "
        )?;
        output.flush()?;

        answer.clear();
        if input.read_line(&mut answer)? == 0 {
            writeln!(output)?;
            return Ok(all);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(all);
        }

        match answer.parse::<CaseRange>() {
            Ok(range) if range.last() <= available => return Ok(range),
            Ok(range) => writeln!(
                output,
                "!! Range {range} exceeds the {available} available test cases."
            )?,
            Err(e) => writeln!(output, "!! {e}")?,
        }
    }
}
