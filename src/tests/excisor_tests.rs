// src/tests/excisor_tests.rs

//! tests for `excisor.rs`

use crate::common::{FPath, RecordError};
use crate::data::record::{Level, LevelFilter, Record};
use crate::debug::helpers::{create_temp_dir, create_temp_file, ntf_fpath};
use crate::readers::recordreader::parse_records;
use crate::tests::common::{LOG_2_HEADER1, LOG_2_RECORDS, LOG_REPEATED};
use crate::writers::excisor::excise;

use std::fs;

/// Parse `path`'s content and return full records.
fn parse_file(path: &FPath) -> Vec<Record> {
    let content = fs::read_to_string(path).unwrap();
    parse_records(&content, LevelFilter::All)
        .into_iter()
        .map(|parsed| Record::from_parts(path, parsed.level, parsed.header, parsed.body))
        .collect()
}

/// Excising the first record leaves the file containing exactly the
/// second, with no remnant of the removed text.
#[test]
fn test_excise_first_record() {
    let ntf = create_temp_file(LOG_2_RECORDS);
    let path = ntf_fpath(&ntf);

    let records = parse_file(&path);
    assert_eq!(records.len(), 2);
    excise(&records[0]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("boom"));
    let remaining = parse_file(&path);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].level, Level::Info);
    assert_eq!(remaining[0].header, LOG_2_HEADER1);
}

/// Excising the last record leaves the first untouched, byte for byte.
#[test]
fn test_excise_last_record() {
    let ntf = create_temp_file(LOG_2_RECORDS);
    let path = ntf_fpath(&ntf);

    let records = parse_file(&path);
    excise(&records[1]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[2024-01-01 00:00:00] local.ERROR: boom\nStack trace:\n#0 ...\n");
    let remaining = parse_file(&path);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].level, Level::Error);
}

/// Every occurrence of the exact header+body text is removed, not only
/// the first.
#[test]
fn test_excise_all_occurrences() {
    let ntf = create_temp_file(LOG_REPEATED);
    let path = ntf_fpath(&ntf);

    let records = parse_file(&path);
    assert_eq!(records.len(), 3);
    // records[0] and records[2] are byte-identical spans
    assert_eq!(records[0].span(), records[2].span());
    excise(&records[0]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("flaky"));
    let remaining = parse_file(&path);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].level, Level::Notice);
}

/// Excising a record twice is harmless; the second call removes nothing.
#[test]
fn test_excise_twice() {
    let ntf = create_temp_file(LOG_2_RECORDS);
    let path = ntf_fpath(&ntf);

    let records = parse_file(&path);
    excise(&records[0]).unwrap();
    let content_after_first = fs::read_to_string(&path).unwrap();
    excise(&records[0]).unwrap();
    let content_after_second = fs::read_to_string(&path).unwrap();
    assert_eq!(content_after_first, content_after_second);
}

/// A missing backing file fails the excision; the record is not
/// considered deleted.
#[test]
fn test_excise_missing_file() {
    let tmpdir = create_temp_dir();
    let missing: FPath = format!(
        "{}/no-such.log",
        tmpdir.path().to_str().unwrap(),
    );
    let record = Record::from_parts(
        &missing,
        Level::Error,
        String::from("[2024-01-01 00:00:00] local.ERROR: boom"),
        String::from("\n"),
    );
    match excise(&record) {
        Err(RecordError::FileWriteFailed { path, .. }) => {
            assert_eq!(path, missing);
        }
        result => panic!("expected FileWriteFailed, got {:?}", result),
    }
}
