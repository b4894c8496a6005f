// src/readers/recordreader.rs

//! Splits raw log file text into ordered header+body records classified by
//! severity [`Level`].
//!
//! A record begins at a header line: a bracketed date-time token
//! `[YYYY-MM-DD HH:MM:SS]` followed by the remainder of that line. The
//! record body is everything up to the next header or the end of the file.
//!
//! [`Level`]: crate::data::record::Level

use crate::data::record::{Level, LevelFilter};

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// The header pattern. `.` does not cross newlines, so a match runs from
/// the opening bracket to the end of that line, stopping before the line
/// terminator.
pub const RECORD_HEADER_PATTERN: &str = r"\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\].*";

lazy_static! {
    static ref RECORD_HEADER_REGEX: Regex = Regex::new(RECORD_HEADER_PATTERN).unwrap();
}

/// A parsed record before source path and identity are attached: the
/// classified severity and the literal header and body text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedRecord {
    pub level: Level,
    /// Exact text of the header match.
    pub header: String,
    /// Exact text between this header and the next header or end of
    /// content. Begins with the newline that terminated the header line,
    /// when one is present, so `header + body` is contiguous in the
    /// source.
    pub body: String,
}

/// Split `content` into ordered records, keeping those whose severity
/// passes `filter`.
///
/// The headers are all non-overlapping matches of
/// [`RECORD_HEADER_PATTERN`]; the bodies are the text spans obtained by
/// splitting `content` on that same pattern. The span preceding the first
/// header is not a valid record and is discarded.
///
/// Each header is tested case-insensitively against every level marker,
/// in [`Level::ALL`] order:
///
/// * a header matching several markers emits one record *per* matching
///   level, sharing header and body text;
/// * a header matching no marker emits nothing at all.
///
/// Emission preserves the file-appearance order of the headers. Parsing
/// identical content yields identical records; this function holds no
/// state.
pub fn parse_records(
    content: &str,
    filter: LevelFilter,
) -> Vec<ParsedRecord> {
    defn!("(content len {}, {:?})", content.len(), filter);
    let headers: Vec<&str> = RECORD_HEADER_REGEX
        .find_iter(content)
        .map(|match_| match_.as_str())
        .collect();
    // `split` yields one span before the first header (empty when content
    // begins with a header); that span belongs to no record
    let bodies: Vec<&str> = RECORD_HEADER_REGEX
        .split(content)
        .skip(1)
        .collect();
    debug_assert_eq!(
        headers.len(),
        bodies.len(),
        "{} headers but {} bodies",
        headers.len(),
        bodies.len(),
    );

    let mut records: Vec<ParsedRecord> = Vec::with_capacity(headers.len());
    for (header, body) in headers.iter().zip(bodies.iter()) {
        let header_lower: String = header.to_lowercase();
        for level in Level::ALL.iter() {
            if !filter.passes(*level) {
                continue;
            }
            if !header_lower.contains(level.marker()) {
                continue;
            }
            defo!("header {:?} matched {:?}", header, level);
            records.push(ParsedRecord {
                level: *level,
                header: (*header).to_string(),
                body: (*body).to_string(),
            });
        }
    }
    defx!("return {} records", records.len());

    records
}
