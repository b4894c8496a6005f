// src/data/datetime.rs

//! Functions to validate a user-supplied date filter and to extract the
//! bracketed timestamp token from a record header.
//!
//! The timestamp token is stored on the [`Record`] as the raw inner text of
//! the bracket. It is not validated as a calendar date; the header pattern
//! already constrained its shape at parse time.
//!
//! [`Record`]: crate::data::record::Record

use crate::common::{RecordError, RecordResult};

use ::chrono::DateTime;
#[doc(hidden)]
pub use ::chrono::NaiveDate;
use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Accepted string form of a date filter, e.g. `"2024-01-15"`.
pub const DATE_FILTER_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    /// First bracketed token of a record header,
    /// e.g. `[2024-01-01 00:00:00]`. Capture group 1 is the inner text.
    static ref TIMESTAMP_BRACKET_REGEX: Regex = Regex::new(r"\[([^\]]*)\]").unwrap();
}

/// Parse a user-supplied date filter value.
///
/// Accepts a `YYYY-MM-DD` date or an integer Unix timestamp (seconds).
/// Anything else is [`RecordError::InvalidDateFilter`]. This is checked
/// before any file access is attempted.
pub fn parse_date_filter(input: &str) -> RecordResult<NaiveDate> {
    defñ!("({:?})", input);
    let input_ = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input_, DATE_FILTER_FORMAT) {
        return Ok(date);
    }
    if let Ok(seconds) = input_.parse::<i64>() {
        if let Some(dt) = DateTime::from_timestamp(seconds, 0) {
            return Ok(dt.date_naive());
        }
    }

    Err(RecordError::InvalidDateFilter {
        input: input.to_string(),
    })
}

/// Return the inner text of the first bracketed token of `header`,
/// e.g. `"2024-01-01 00:00:00"`. Empty string when no bracket is present
/// (cannot happen for a header produced by the record parser).
pub fn extract_timestamp(header: &str) -> String {
    match TIMESTAMP_BRACKET_REGEX.captures(header) {
        Some(captures) => captures[1].to_string(),
        None => String::new(),
    }
}
