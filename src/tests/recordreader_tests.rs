// src/tests/recordreader_tests.rs

//! tests for `recordreader.rs`

use crate::data::record::{Level, LevelFilter};
use crate::readers::recordreader::{parse_records, ParsedRecord};
use crate::tests::common::{
    LOG_2_BODY0,
    LOG_2_BODY1,
    LOG_2_HEADER0,
    LOG_2_HEADER1,
    LOG_2_RECORDS,
    LOG_MULTI_MARKER,
    LOG_NO_MARKER,
    LOG_PREAMBLE,
};

use ::test_case::test_case;

#[test]
fn test_parse_empty_content() {
    assert!(parse_records("", LevelFilter::All).is_empty());
}

#[test]
fn test_parse_two_records() {
    let records: Vec<ParsedRecord> = parse_records(LOG_2_RECORDS, LevelFilter::All);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[0].header, LOG_2_HEADER0);
    assert_eq!(records[0].body, LOG_2_BODY0);
    assert_eq!(records[1].level, Level::Info);
    assert_eq!(records[1].header, LOG_2_HEADER1);
    assert_eq!(records[1].body, LOG_2_BODY1);
}

/// `header + body` of every record, in order, reassembles the parsed
/// content exactly (after the discarded pre-header text); the spans are
/// contiguous and non-overlapping.
#[test]
fn test_parse_spans_reassemble_content() {
    let records = parse_records(LOG_2_RECORDS, LevelFilter::All);
    let mut reassembled = String::new();
    for record in records.iter() {
        reassembled.push_str(&record.header);
        reassembled.push_str(&record.body);
    }
    assert_eq!(reassembled, LOG_2_RECORDS);
}

#[test]
fn test_parse_level_filter() {
    let records = parse_records(LOG_2_RECORDS, LevelFilter::Only(Level::Error));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[0].header, LOG_2_HEADER0);
}

#[test]
fn test_parse_level_filter_no_match() {
    let records = parse_records(LOG_2_RECORDS, LevelFilter::Only(Level::Alert));
    assert!(records.is_empty());
}

/// Calling twice on identical input yields identical ordered records.
#[test]
fn test_parse_idempotent() {
    let records_a = parse_records(LOG_2_RECORDS, LevelFilter::All);
    let records_b = parse_records(LOG_2_RECORDS, LevelFilter::All);
    assert_eq!(records_a, records_b);
}

/// Text preceding the first header belongs to no record and is discarded.
#[test]
fn test_parse_preamble_discarded() {
    let records = parse_records(LOG_PREAMBLE, LevelFilter::All);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Warning);
    assert_eq!(records[0].header, "[2024-03-03 10:20:30] local.WARNING: low disk");
    assert_eq!(records[0].body, "\n");
}

/// A header matching no recognized level marker contributes zero records,
/// for any filter. The header and its body are silently dropped.
#[test_case(LevelFilter::All)]
#[test_case(LevelFilter::Only(Level::Error))]
#[test_case(LevelFilter::Only(Level::Debug))]
fn test_parse_drop_on_no_marker(filter: LevelFilter) {
    assert!(parse_records(LOG_NO_MARKER, filter).is_empty());
}

/// A header matching two markers yields two records sharing header and
/// body but differing level, in level declaration order.
#[test]
fn test_parse_multi_marker_duplication() {
    let records = parse_records(LOG_MULTI_MARKER, LevelFilter::All);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[1].level, Level::Debug);
    assert_eq!(records[0].header, records[1].header);
    assert_eq!(records[0].body, records[1].body);
}

/// Under a single-level filter the duplicated header yields only the
/// matching record.
#[test]
fn test_parse_multi_marker_filtered() {
    let records = parse_records(LOG_MULTI_MARKER, LevelFilter::Only(Level::Debug));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Debug);
}

/// Marker matching is case-insensitive.
#[test_case("[2024-01-01 00:00:00] local.ERROR: x\n"; "uppercase")]
#[test_case("[2024-01-01 00:00:00] local.error: x\n"; "lowercase")]
#[test_case("[2024-01-01 00:00:00] local.Error: x\n"; "mixed")]
fn test_parse_marker_case_insensitive(content: &str) {
    let records = parse_records(content, LevelFilter::Only(Level::Error));
    assert_eq!(records.len(), 1);
}

/// The last header of a file with nothing after it still yields a valid
/// record, with an empty body.
#[test]
fn test_parse_header_at_end_of_content() {
    let content = "[2024-01-01 00:00:00] local.ERROR: boom";
    let records = parse_records(content, LevelFilter::All);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].header, content);
    assert_eq!(records[0].body, "");
}

/// A malformed bracket token is not a header; the text falls into the
/// preceding record's body.
#[test]
fn test_parse_malformed_bracket_is_body() {
    let content = "\
[2024-01-01 00:00:00] local.ERROR: boom
[not a timestamp] local.INFO: absorbed
";
    let records = parse_records(content, LevelFilter::All);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[0].body, "\n[not a timestamp] local.INFO: absorbed\n");
}
