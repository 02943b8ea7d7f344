#![doc = include_str!("../README.md")]

use std::ops::Range;
use strum::{Display, EnumIter};
use thiserror::Error;

#[cfg(test)]
mod unit_tests;

// public exports
pub mod emit;
pub mod header;
pub mod range;
pub mod reader;
pub mod scan;

pub use range::CaseRange;

// shared data structures

/// How many input fields a test case has (the first 3 lines of a record).
pub const NUM_INPUT_FIELDS: usize = 57;

/// How many output fields a test case has (the last 3 lines of a record).
pub const NUM_OUTPUT_FIELDS: usize = 31;

/// The total count of fields of a test case.
pub const NUM_FIELDS: usize = NUM_INPUT_FIELDS + NUM_OUTPUT_FIELDS;

/// The column labels of the input fields, in file order.
pub const INPUT_FIELD_NAMES: [&str; NUM_INPUT_FIELDS] = [
    "CASE_NO", "PALT", "TOGW", "OAT", "WINDREP", "GUST", "WIND_DIR", "RA", "RWYDIR", "SLOPE(%)",
    "RCR", "RSC", "RFF", "DVI", "CG(%)", "DRG_IDX", "BTMS", "COFMIN", "DER_HT", "CLRATE4",
    "CLALT4", "CLRATE3", "CLALT3", "OB_HT_1", "OB_HT_2", "OB_HT_3", "OB_HT_4", "OB_HT_5",
    "OB_HT_6", "OB_HT_7", "OB_HT_8", "OB_HT_9", "OB_HT10", "OB_DIS_1", "OB_DIS_2", "OB_DIS_3",
    "OB_DIS_4", "OB_DIS_5", "OB_DIS_6", "OB_DIS_7", "OB_DIS_8", "OB_DIS_9", "OB_DIS10", "ACCBL",
    "WNGAI", "ENGAI", "BRKC", "SPOILC", "REVC", "EOCS_REQ", "THRUST", "ELEV", "OPER_WT",
    "OP_WT_CG", "FUEL", "PAYLOAD", "P/L_STA",
];

/// The column labels of the output fields, in file order.
pub const OUTPUT_FIELD_NAMES: [&str; NUM_OUTPUT_FIELDS] = [
    "MSG_CODE", "CATII_WT", "HWIND", "XWIND", "EPR", "FL_POS", "FL_INDEX", "COF", "CFL", "TO_RUN",
    "ACC_ALT", "VR", "VMCG", "VBMAX", "VROT", "VGO", "VMCO", "VMFR", "VMSR", "STAB", "ACCSPD_1",
    "ACCSPD_2", "ACCSPD_3", "ACCSPD_4", "ACCTIME1", "ACCTIME2", "ACCTIME3", "ACCTIME4",
    "DVR_CALC", "LD_FACT", "%MAX_THR",
];

/// The two groups of fields every test case consists of.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, EnumIter, Display)]
pub enum FieldGroup {
    /// Input data for the takeoff computation, fields `0..57`.
    Input,
    /// Expected results of the takeoff computation, fields `57..88`.
    Output,
}

impl FieldGroup {
    /// The positions of this group inside a test case.
    pub fn positions(self) -> Range<usize> {
        match self {
            FieldGroup::Input => 0..NUM_INPUT_FIELDS,
            FieldGroup::Output => NUM_INPUT_FIELDS..NUM_FIELDS,
        }
    }

    /// The column labels of this group.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            FieldGroup::Input => &INPUT_FIELD_NAMES,
            FieldGroup::Output => &OUTPUT_FIELD_NAMES,
        }
    }
}

/// One test case: exactly [NUM_FIELDS] values, identified by its position in the file.
#[derive(Clone, Debug, PartialEq)]
pub struct TestCase {
    number: usize,
    fields: [f64; NUM_FIELDS],
}

impl TestCase {
    /// A new test case, `number` is 1-based.
    pub(crate) fn new(number: usize, fields: [f64; NUM_FIELDS]) -> Self {
        Self { number, fields }
    }

    /// The 1-based case number: the position of the case in the file.
    pub fn number(&self) -> usize {
        self.number
    }

    /// All fields, inputs first.
    pub fn fields(&self) -> &[f64; NUM_FIELDS] {
        &self.fields
    }

    /// The input field group.
    pub fn inputs(&self) -> &[f64] {
        &self.fields[FieldGroup::Input.positions()]
    }

    /// The output field group.
    pub fn outputs(&self) -> &[f64] {
        &self.fields[FieldGroup::Output.positions()]
    }

    /// The fields of the given group.
    pub fn group(&self, group: FieldGroup) -> &[f64] {
        &self.fields[group.positions()]
    }

    /// Look up a field by its column label, e.g. `"TOGW"`.
    pub fn field(&self, name: &str) -> Option<f64> {
        INPUT_FIELD_NAMES
            .iter()
            .chain(OUTPUT_FIELD_NAMES.iter())
            .position(|label| *label == name)
            .map(|idx| self.fields[idx])
    }
}

/// All test cases of one file, in file order. Only the reader appends to the list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestCaseList {
    cases: Vec<TestCase>,
}

impl TestCaseList {
    /// An empty list.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a case. The case number has to match the next position.
    pub(crate) fn push(&mut self, case: TestCase) {
        debug_assert_eq!(case.number, self.cases.len() + 1);
        self.cases.push(case);
    }

    /// The count of test cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// If the list contains no test cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Get a test case by its 1-based case number.
    pub fn get(&self, case_number: usize) -> Option<&TestCase> {
        case_number
            .checked_sub(1)
            .and_then(|idx| self.cases.get(idx))
    }

    /// Iterate over all test cases, in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// All test cases as a slice.
    pub fn as_slice(&self) -> &[TestCase] {
        &self.cases
    }

    /// Select the test cases in the given range. The range has to lie inside the list.
    pub fn select(&self, range: CaseRange) -> Result<&[TestCase], Error> {
        if range.last() > self.cases.len() {
            return Err(Error::InvalidRange {
                range: range.to_string(),
                available: self.cases.len(),
            });
        }

        Ok(&self.cases[(range.first() - 1)..range.last()])
    }
}

impl<'a> IntoIterator for &'a TestCaseList {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The error type for reading and emitting test cases
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened.
    #[error("Cannot open \"{path}\": {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The first line does not start with the `TAKEOFF` marker. `found` is the first token, if any.
    #[error("Not a takeoff data file: expected marker \"{}\", found {}", header::MARKER, describe_token(.found))]
    Format { found: Option<String> },
    /// A token in the data region is not a finite decimal number. `position` is the 0-based
    /// index of the token in the data region.
    #[error("Line {line}: invalid numeric token \"{token}\" (data token no. {position})")]
    InvalidToken {
        line: usize,
        position: usize,
        token: String,
    },
    /// The data region ended in the middle of a test case.
    #[error("Incomplete test case at end of input: {complete_cases} complete cases, {leftover_fields} leftover fields")]
    IncompleteCase {
        complete_cases: usize,
        leftover_fields: usize,
    },
    /// A case range is reversed, starts at 0 or cannot be parsed.
    #[error("Malformed case range \"{0}\": expected N or FIRST-LAST with 1 <= FIRST <= LAST")]
    MalformedRange(String),
    /// A case range lies outside the available cases.
    #[error("Invalid case range {range}: {available} test cases available")]
    InvalidRange { range: String, available: usize },
}

impl Error {
    /// If this error happened while scanning the data region. Test cases read before such an
    /// error are still usable.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidToken { .. } | Error::IncompleteCase { .. }
        )
    }
}

/// Quote a token for error messages.
fn describe_token(token: &Option<String>) -> String {
    match token {
        Some(token) => format!("\"{token}\""),
        None => "nothing".to_string(),
    }
}
