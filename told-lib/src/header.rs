//! Header check
//!
//! The export starts with a header of 6 lines: the first line carries the marker `TAKEOFF` and
//! the time the export was generated, the other 5 lines are column labels and are skipped
//! without looking at them.

use crate::scan::LineSource;
use crate::Error;
use std::fmt::{Display, Formatter};
use std::io::BufRead;

/// The marker the first line has to start with.
pub const MARKER: &str = "TAKEOFF";

/// The count of header lines, including the marker line.
pub const HEADER_LINES: usize = 6;

/// The parsed first header line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    date: Option<String>,
    timestamp: String,
}

impl Header {
    /// Parse the first line of an export. The first token has to be exactly [MARKER].
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some(MARKER) => {}
            found => {
                return Err(Error::Format {
                    found: found.map(str::to_string),
                })
            }
        }

        let date = tokens.next().map(str::to_string);
        // the marker is the first token, everything after it is the timestamp
        let timestamp = line.trim_start()[MARKER.len()..].trim().to_string();

        Ok(Self { date, timestamp })
    }

    /// The second token of the first line, the date of the export (e.g. `04/11/12`).
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Everything after the marker (e.g. `04/11/12 12:50:33 PM`), may be empty.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.timestamp.is_empty() {
            write!(f, "{MARKER}")
        } else {
            write!(f, "{MARKER} {}", self.timestamp)
        }
    }
}

/// Read and check the header. Afterward, `lines` is positioned at the start of the data region.
///
/// A file with fewer than [HEADER_LINES] lines is no error, the data region is just empty.
pub fn read_header<R: BufRead>(lines: &mut LineSource<R>) -> Result<Header, Error> {
    let Some(first_line) = lines.next_line()? else {
        return Err(Error::Format { found: None });
    };

    let header = Header::parse(&first_line)?;

    // the column labels are not needed
    for _ in 1..HEADER_LINES {
        if lines.next_line()?.is_none() {
            break;
        }
    }

    Ok(header)
}
