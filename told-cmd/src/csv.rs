//! Everything needed to save the selected test cases as CSV.

use core::error::Error;
use csv::WriterBuilder;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use told_lib::{TestCase, INPUT_FIELD_NAMES, OUTPUT_FIELD_NAMES};

/// Error type for [CsvFile]
#[derive(Debug)]
pub enum CsvFileError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl Display for CsvFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvFileError::Io(e) => write!(f, "IO error: {e}"),
            CsvFileError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl Error for CsvFileError {}

impl From<std::io::Error> for CsvFileError {
    fn from(value: std::io::Error) -> Self {
        CsvFileError::Io(value)
    }
}

impl From<csv::Error> for CsvFileError {
    fn from(value: csv::Error) -> Self {
        CsvFileError::Csv(value)
    }
}

/// This struct represents a CSV file to write test cases to, one row per case.
#[derive(Debug)]
pub struct CsvFile<W: Write>(csv::Writer<W>);

impl CsvFile<File> {
    /// Create a new CSV File writer writing to the specified path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, CsvFileError> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvFile<W> {
    /// Create a CSV writer writing to `writer`. The header row is written immediately.
    pub fn from_writer(writer: W) -> Result<Self, CsvFileError> {
        let mut builder = WriterBuilder::new();

        builder.delimiter(b';');

        // target specific: on windows, lines should end with CRLF, on all other platforms, the default
        // LF is enough.
        #[cfg(target_family = "windows")]
        {
            use csv::Terminator;

            builder.terminator(Terminator::CRLF);
        }

        let mut writer = builder.from_writer(writer);

        // CSV format: case no; one column per field, named by the column labels of the export
        let header = ["case no"]
            .into_iter()
            .chain(INPUT_FIELD_NAMES)
            .chain(OUTPUT_FIELD_NAMES);
        writer.write_record(header)?;

        Ok(Self(writer))
    }

    /// Append the given test cases to the CSV file.
    pub fn write_cases(&mut self, cases: &[TestCase]) -> Result<(), CsvFileError> {
        for case in cases {
            let row = std::iter::once(case.number().to_string())
                .chain(case.fields().iter().map(f64::to_string));

            self.0.write_record(row)?;
        }

        self.0.flush()?;
        Ok(())
    }

    /// Finish writing and return the inner writer.
    pub fn into_inner(self) -> Result<W, CsvFileError> {
        self.0
            .into_inner()
            .map_err(|e| CsvFileError::Io(e.into_error()))
    }
}
