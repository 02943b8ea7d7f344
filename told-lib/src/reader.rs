//! Test case assembly: the data region is read as one flat sequence of values, every
//! [NUM_FIELDS] values form one [TestCase].

use crate::header::{read_header, Header};
use crate::scan::{parse_field, LineSource, LineTokens};
use crate::{Error, TestCase, TestCaseList, NUM_FIELDS};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open an export file for reading.
pub fn open<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, Error> {
    let path = path.as_ref();

    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::FileOpen {
            path: path.display().to_string(),
            source,
        })
}

/// Progress information, handed to the callback of [TakeoffReader::read_all] after every case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Physical lines read, including the header.
    pub lines_read: usize,
    /// Test cases assembled.
    pub cases_read: usize,
}

/// The result of reading a complete export.
///
/// If scanning the data region failed, `cases` holds all test cases completed before the
/// failure and `error` the reason.
#[derive(Debug)]
pub struct ParseOutcome {
    pub header: Header,
    pub cases: TestCaseList,
    pub error: Option<Error>,
    /// Physical lines read, including the header.
    pub lines_read: usize,
}

/// Read a complete export. Errors in the header are returned directly, errors in the data
/// region end up in [ParseOutcome::error].
pub fn read_test_cases<R: BufRead>(reader: R) -> Result<ParseOutcome, Error> {
    Ok(TakeoffReader::new(reader)?.read_all(|_| {}))
}

/// Reads test cases lazily, one per call of [Iterator::next].
///
/// After the first error, the iterator is exhausted.
#[derive(Debug)]
pub struct TakeoffReader<R> {
    lines: LineSource<R>,
    header: Header,
    // tokens of the current line, None before the first data line
    tokens: Option<LineTokens>,
    tokens_read: usize,
    cases_read: usize,
    finished: bool,
}

impl<R: BufRead> TakeoffReader<R> {
    /// Check the header and create the reader, positioned at the start of the data region.
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut lines = LineSource::new(reader);
        let header = read_header(&mut lines)?;

        Ok(Self {
            lines,
            header,
            tokens: None,
            tokens_read: 0,
            cases_read: 0,
            finished: false,
        })
    }

    /// The header of the export.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Physical lines read so far, including the header.
    pub fn lines_read(&self) -> usize {
        self.lines.line_number()
    }

    /// Test cases assembled so far.
    pub fn cases_read(&self) -> usize {
        self.cases_read
    }

    /// Read all remaining test cases into a list, calling `progress` after every case.
    pub fn read_all<F: FnMut(Progress)>(mut self, mut progress: F) -> ParseOutcome {
        let mut cases = TestCaseList::new();
        let mut error = None;

        while let Some(case) = self.next() {
            match case {
                Ok(case) => cases.push(case),
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }

            progress(Progress {
                lines_read: self.lines.line_number(),
                cases_read: self.cases_read,
            });
        }

        ParseOutcome {
            lines_read: self.lines.line_number(),
            header: self.header,
            cases,
            error,
        }
    }

    /// Assemble the next case. `Ok(None)` at a clean end of the data region.
    fn read_case(&mut self) -> Result<Option<TestCase>, Error> {
        let mut fields = [0.0; NUM_FIELDS];

        for (count, field) in fields.iter_mut().enumerate() {
            match self.next_value()? {
                Some(value) => *field = value,
                None if count == 0 => return Ok(None),
                None => {
                    return Err(Error::IncompleteCase {
                        complete_cases: self.cases_read,
                        leftover_fields: count,
                    })
                }
            }
        }

        self.cases_read += 1;
        Ok(Some(TestCase::new(self.cases_read, fields)))
    }

    /// The next value of the flat sequence, continuing on the next line if the current one is
    /// exhausted. `Ok(None)` at the end of the input.
    fn next_value(&mut self) -> Result<Option<f64>, Error> {
        loop {
            if let Some(tokens) = &mut self.tokens {
                let line = tokens.line_number();

                if let Some(token) = tokens.next_token() {
                    let position = self.tokens_read;
                    self.tokens_read += 1;

                    return match parse_field(token) {
                        Some(value) => Ok(Some(value)),
                        None => Err(Error::InvalidToken {
                            line,
                            position,
                            token: token.to_string(),
                        }),
                    };
                }
            }

            match self.lines.next_line()? {
                Some(line) => {
                    self.tokens = Some(LineTokens::new(self.lines.line_number(), line));
                }
                None => return Ok(None),
            }
        }
    }
}

impl<R: BufRead> Iterator for TakeoffReader<R> {
    type Item = Result<TestCase, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_case() {
            Ok(Some(case)) => Some(Ok(case)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
