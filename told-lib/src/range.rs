//! Selection of a sub-range of test cases for code generation.

use crate::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An inclusive range of 1-based case numbers, `first..=last`.
///
/// The textual form is either a single case number (`7`) or `FIRST-LAST` (`3-12`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseRange {
    first: usize,
    last: usize,
}

impl CaseRange {
    /// Create a new range. `first` has to be at least 1 and must not be greater than `last`.
    pub fn new(first: usize, last: usize) -> Result<Self, Error> {
        if first == 0 || first > last {
            return Err(Error::MalformedRange(format!("{first}-{last}")));
        }

        Ok(Self { first, last })
    }

    /// The range covering all of `count` cases, `None` if there are no cases.
    pub fn all(count: usize) -> Option<Self> {
        (count > 0).then_some(Self {
            first: 1,
            last: count,
        })
    }

    /// The first case number in the range.
    pub fn first(&self) -> usize {
        self.first
    }

    /// The last case number in the range (inclusive).
    pub fn last(&self) -> usize {
        self.last
    }

    /// How many cases the range covers.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Always false, a range covers at least one case.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// If the case number lies inside the range.
    pub fn contains(&self, case_number: usize) -> bool {
        (self.first..=self.last).contains(&case_number)
    }
}

impl Display for CaseRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

impl FromStr for CaseRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedRange(s.to_string());
        let parse_number = |number: &str| number.trim().parse::<usize>().map_err(|_| malformed());

        let (first, last) = match s.split_once('-') {
            Some((first, last)) => (parse_number(first)?, parse_number(last)?),
            None => {
                let number = parse_number(s)?;
                (number, number)
            }
        };

        Self::new(first, last).map_err(|_| malformed())
    }
}
