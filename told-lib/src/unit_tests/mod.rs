//! All unit tests

use crate::header::{Header, HEADER_LINES};
use crate::{Error, FieldGroup, TestCase, NUM_FIELDS};

mod reader_examples;

// Path to the test directory
const TEST_FILE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-files");

/// A valid first header line
const MARKER_LINE: &str = "TAKEOFF                                      04/11/12 12:50:33 PM";

/// The value of the data token with the given position in [export_text].
fn token_value(position: usize) -> f64 {
    // distinct per position, negative every 7th token, with a fractional part
    let value = position as f64 + 0.25;
    if position % 7 == 3 {
        -value
    } else {
        value
    }
}

/// Create the text of an export with the given first line and `token_count` data tokens,
/// written 20 tokens per line with ragged spacing.
fn export_text(first_line: &str, token_count: usize) -> String {
    let mut text = String::from(first_line);
    text.push('\n');

    for i in 1..HEADER_LINES {
        text.push_str(&format!("  LABEL_{i}_A   LABEL_{i}_B\n"));
    }

    for position in 0..token_count {
        // vary the separators, the format does not guarantee fixed widths
        let separator = if position % 3 == 0 { "   " } else { " " };
        text.push_str(separator);
        text.push_str(&token_value(position).to_string());

        if position % 20 == 19 {
            text.push('\n');
        }
    }
    text.push('\n');

    text
}

/// Assert that the case holds the values of the data tokens it was built from.
fn assert_case_matches_tokens(case: &TestCase) {
    let offset = (case.number() - 1) * NUM_FIELDS;

    for (idx, value) in case.fields().iter().enumerate() {
        assert_eq!(
            *value,
            token_value(offset + idx),
            "case {} field {idx}",
            case.number()
        );
    }
}

/// Parse the header of a first line
#[test]
fn test_header_parse() {
    let header = Header::parse(MARKER_LINE).unwrap();

    assert_eq!(header.date(), Some("04/11/12"));
    assert_eq!(header.timestamp(), "04/11/12 12:50:33 PM");
    assert_eq!(header.to_string(), "TAKEOFF 04/11/12 12:50:33 PM");
}

/// The marker alone is enough
#[test]
fn test_header_without_timestamp() {
    let header = Header::parse("  TAKEOFF").unwrap();

    assert_eq!(header.date(), None);
    assert_eq!(header.timestamp(), "");
    assert_eq!(header.to_string(), "TAKEOFF");
}

/// The marker comparison is case-sensitive and needs the complete token
#[test]
fn test_header_wrong_marker() {
    for (line, expected) in [
        ("LANDING   04/11/12 12:50:33 PM", Some("LANDING")),
        ("takeoff 04/11/12", Some("takeoff")),
        ("TAKEOFF2 04/11/12", Some("TAKEOFF2")),
        ("", None),
        ("     ", None),
    ] {
        match Header::parse(line) {
            Err(Error::Format { found }) => assert_eq!(found.as_deref(), expected),
            other => panic!("{line:?}: expected format error, got {other:?}"),
        }
    }
}

/// Field groups split a case at position 57
#[test]
fn test_field_groups() {
    assert_eq!(FieldGroup::Input.positions(), 0..57);
    assert_eq!(FieldGroup::Output.positions(), 57..88);
    assert_eq!(FieldGroup::Input.names().len(), 57);
    assert_eq!(FieldGroup::Output.names().len(), 31);

    let fields: [f64; NUM_FIELDS] = std::array::from_fn(|i| i as f64);
    let case = TestCase::new(1, fields);

    assert_eq!(case.inputs().len(), 57);
    assert_eq!(case.outputs().len(), 31);
    assert_eq!(case.outputs()[0], 57.0);
    assert_eq!(case.group(FieldGroup::Output), case.outputs());
    assert_eq!(case.field("CASE_NO"), Some(0.0));
    assert_eq!(case.field("P/L_STA"), Some(56.0));
    assert_eq!(case.field("MSG_CODE"), Some(57.0));
    assert_eq!(case.field("%MAX_THR"), Some(87.0));
    assert_eq!(case.field("UNKNOWN"), None);
}
