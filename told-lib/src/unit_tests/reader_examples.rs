//! Reading exports built in memory: header check, scan and assembly.

use super::{assert_case_matches_tokens, export_text, MARKER_LINE};
use crate::header::HEADER_LINES;
use crate::reader::{read_test_cases, Progress, TakeoffReader};
use crate::{CaseRange, Error, NUM_FIELDS};

#[test]
fn test_n_complete_cases() {
    for count in [0, 1, 2, 5] {
        let text = export_text(MARKER_LINE, count * NUM_FIELDS);
        let outcome = read_test_cases(text.as_bytes()).unwrap();

        assert!(outcome.error.is_none(), "{:?}", outcome.error);
        assert_eq!(outcome.cases.len(), count);
        assert_eq!(outcome.header.date(), Some("04/11/12"));

        for (idx, case) in outcome.cases.iter().enumerate() {
            assert_eq!(case.number(), idx + 1);
            assert_case_matches_tokens(case);
        }
    }
}

#[test]
fn test_88_and_176_tokens() {
    let outcome = read_test_cases(export_text(MARKER_LINE, 88).as_bytes()).unwrap();
    assert_eq!(outcome.cases.len(), 1);

    let outcome = read_test_cases(export_text(MARKER_LINE, 176).as_bytes()).unwrap();
    assert_eq!(outcome.cases.len(), 2);
}

#[test]
fn test_wrong_marker() {
    let text = export_text("LANDING   04/11/12 12:50:33 PM", 2 * NUM_FIELDS);

    match read_test_cases(text.as_bytes()) {
        Err(Error::Format { found }) => assert_eq!(found.as_deref(), Some("LANDING")),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_empty_file() {
    let result = read_test_cases("".as_bytes());
    assert!(matches!(result, Err(Error::Format { found: None })));
}

/// Fewer than 6 header lines: no data, but no error either
#[test]
fn test_short_header() {
    let outcome = read_test_cases("TAKEOFF 01/02/03\nCASE_NO PALT\n".as_bytes()).unwrap();

    assert!(outcome.cases.is_empty());
    assert!(outcome.error.is_none());
    assert_eq!(outcome.lines_read, 2);
}

/// One additional token: one complete case and 2 leftover fields, never a second case
#[test]
fn test_leftover_fields() {
    let text = export_text(MARKER_LINE, NUM_FIELDS + 2);
    let outcome = read_test_cases(text.as_bytes()).unwrap();

    assert_eq!(outcome.cases.len(), 1);
    assert_case_matches_tokens(outcome.cases.get(1).unwrap());

    match outcome.error {
        Some(Error::IncompleteCase {
            complete_cases,
            leftover_fields,
        }) => {
            assert_eq!(complete_cases, 1);
            assert_eq!(leftover_fields, 2);
        }
        other => panic!("expected incomplete case, got {other:?}"),
    }
}

/// A non-numeric token at position k keeps floor(k / 88) cases
#[test]
fn test_invalid_token() {
    for position in [0, 50, 87, 88, 200] {
        let text = export_text(MARKER_LINE, 3 * NUM_FIELDS);
        let bad_token = super::token_value(position).to_string();

        // replace exactly the token at `position` - all token texts are distinct
        let text = text.replacen(&format!(" {bad_token} "), " N/A ", 1);
        let text = if text.contains(" N/A ") {
            text
        } else {
            text.replacen(&format!(" {bad_token}\n"), " N/A\n", 1)
        };

        let outcome = read_test_cases(text.as_bytes()).unwrap();

        assert_eq!(outcome.cases.len(), position / NUM_FIELDS, "position {position}");

        match outcome.error {
            Some(Error::InvalidToken {
                line,
                position: error_position,
                token,
            }) => {
                assert_eq!(token, "N/A");
                assert_eq!(error_position, position);
                // 6 header lines, 20 tokens per line
                assert_eq!(line, 6 + position / 20 + 1);
            }
            other => panic!("expected invalid token, got {other:?}"),
        }
    }
}

/// Split an export text into the header lines and the data region
fn split_header(text: &str) -> (&str, &str) {
    let idx = text.match_indices('\n').nth(HEADER_LINES - 1).unwrap().0;
    text.split_at(idx + 1)
}

/// The line grouping does not matter: one value per line and everything on one line
#[test]
fn test_layout_independent() {
    let text = export_text(MARKER_LINE, 2 * NUM_FIELDS);
    let (header, data) = split_header(&text);

    let one_per_line = format!("{header}{}", data.replace(' ', "\n"));
    let one_line = format!("{header}{}\n", data.replace('\n', " "));

    for text in [one_per_line, one_line] {
        let outcome = read_test_cases(text.as_bytes()).unwrap();

        assert!(outcome.error.is_none());
        assert_eq!(outcome.cases.len(), 2);
        outcome.cases.iter().for_each(assert_case_matches_tokens);
    }
}

/// Windows line endings and blank lines in the data region
#[test]
fn test_crlf_and_blank_lines() {
    let text = export_text(MARKER_LINE, NUM_FIELDS);
    let (header, data) = split_header(&text);
    let text = format!("{header}\n\n{}\r\n   \r\n", data.replace('\n', "\r\n\r\n"));

    let outcome = read_test_cases(text.as_bytes()).unwrap();

    assert!(outcome.error.is_none());
    assert_eq!(outcome.cases.len(), 1);
    assert_case_matches_tokens(outcome.cases.get(1).unwrap());
}

/// The lazy reader yields cases one by one and stops after the first error
#[test]
fn test_lazy_reader() {
    let text = export_text(MARKER_LINE, 2 * NUM_FIELDS + 5);
    let mut reader = TakeoffReader::new(text.as_bytes()).unwrap();

    assert_eq!(reader.header().timestamp(), "04/11/12 12:50:33 PM");
    assert_eq!(reader.lines_read(), 6);
    assert_eq!(reader.cases_read(), 0);

    assert_eq!(reader.next().unwrap().unwrap().number(), 1);
    assert_eq!(reader.next().unwrap().unwrap().number(), 2);
    assert_eq!(reader.cases_read(), 2);
    assert!(matches!(
        reader.next(),
        Some(Err(Error::IncompleteCase {
            complete_cases: 2,
            leftover_fields: 5
        }))
    ));
    assert!(reader.next().is_none());
    assert!(reader.next().is_none());
}

#[test]
fn test_progress_callback() {
    let text = export_text(MARKER_LINE, 3 * NUM_FIELDS);
    let mut progress = Vec::new();

    let outcome = TakeoffReader::new(text.as_bytes())
        .unwrap()
        .read_all(|p| progress.push(p));

    assert_eq!(outcome.cases.len(), 3);
    assert_eq!(
        progress.iter().map(|p| p.cases_read).collect::<Vec<_>>(),
        [1, 2, 3]
    );
    // 88 tokens per case, 20 per line: the 1st case ends on the 5th data line
    assert_eq!(
        progress[0],
        Progress {
            lines_read: 6 + 5,
            cases_read: 1
        }
    );
    assert!(progress.windows(2).all(|w| w[0].lines_read <= w[1].lines_read));
}

#[test]
fn test_select_range() {
    let text = export_text(MARKER_LINE, 4 * NUM_FIELDS);
    let cases = read_test_cases(text.as_bytes()).unwrap().cases;

    let selected = cases.select(CaseRange::new(2, 3).unwrap()).unwrap();
    assert_eq!(
        selected.iter().map(|c| c.number()).collect::<Vec<_>>(),
        [2, 3]
    );

    let all = cases.select(CaseRange::all(cases.len()).unwrap()).unwrap();
    assert_eq!(all, cases.as_slice());

    match cases.select(CaseRange::new(3, 5).unwrap()) {
        Err(Error::InvalidRange { range, available }) => {
            assert_eq!(range, "3-5");
            assert_eq!(available, 4);
        }
        other => panic!("expected invalid range, got {other:?}"),
    }

    assert!(cases.get(0).is_none());
    assert!(cases.get(5).is_none());
    assert_eq!(cases.get(4).unwrap().number(), 4);
}

#[test]
fn test_parse_error_classification() {
    assert!(Error::IncompleteCase {
        complete_cases: 0,
        leftover_fields: 1
    }
    .is_parse_error());
    assert!(!Error::Format { found: None }.is_parse_error());
}
