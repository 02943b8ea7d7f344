//! Token stream scanning: physical lines are read one at a time, each line is split into
//! whitespace separated tokens lazily, and every token is converted to a floating point value.

use std::io;
use std::io::BufRead;

/// Reads physical lines from a buffered reader and counts them.
///
/// Lines are decoded lossily: invalid UTF-8 does not abort the read, the affected token
/// fails the numeric conversion instead.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    // count of lines read so far, also the 1-based number of the last line
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Create a new line source, no line is read yet.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Read the next physical line, without the line terminator. Returns `None` at the end of
    /// the input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut line = String::from_utf8_lossy(&self.buffer).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);

        Ok(Some(line))
    }

    /// The 1-based number of the last line read, 0 if nothing was read yet.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// The tokens of one physical line, handed out one at a time.
///
/// The sequence is finite and belongs to exactly one line: when it is exhausted, the next line
/// has to be read.
#[derive(Clone, Debug)]
pub struct LineTokens {
    line: String,
    line_number: usize,
    // byte offset of the rest of the line
    cursor: usize,
}

impl LineTokens {
    /// Tokens of the given line, `line_number` is used for error reporting.
    pub fn new(line_number: usize, line: String) -> Self {
        Self {
            line,
            line_number,
            cursor: 0,
        }
    }

    /// The 1-based line number of the line these tokens belong to.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The next token of the line, `None` if the line is exhausted.
    pub fn next_token(&mut self) -> Option<&str> {
        let rest = &self.line[self.cursor..];

        let Some(start) = rest.find(|c: char| !c.is_whitespace()) else {
            self.cursor = self.line.len();
            return None;
        };
        let len = rest[start..]
            .find(char::is_whitespace)
            .unwrap_or(rest.len() - start);

        let token_start = self.cursor + start;
        self.cursor = token_start + len;

        Some(&self.line[token_start..self.cursor])
    }
}

/// Convert a token to a field value. The token has to be a finite decimal number,
/// like `-12`, `0.25` or `1.5E+3`. Returns `None` for everything else.
pub fn parse_field(token: &str) -> Option<f64> {
    // f64::from_str also accepts "inf", "infinity" and "nan" in any case
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
