// src/data/record.rs

//! Implements a [`Record`] struct and its [`Level`] classification.
//!
//! [`Record`]: crate::data::record::Record
//! [`Level`]: crate::data::record::Level

use crate::common::{FPath, RecordId};
use crate::data::datetime::extract_timestamp;

use std::fmt;
use std::str::FromStr;

use ::serde::{Deserialize, Serialize};

// -----
// Level

/// Severity of one log record; the fixed closed set of eight markers.
///
/// A header is classified by a case-insensitive search for the
/// [`marker`] substring, `"." + name`, e.g. `".error"` matching
/// `"local.ERROR: boom"`.
///
/// [`marker`]: Level#method.marker
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Level {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Level {
    /// All levels in declaration order. Header classification iterates this
    /// array, so a header matching several markers emits records in this
    /// order.
    pub const ALL: [Level; 8] = [
        Level::Emergency,
        Level::Alert,
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// The lowercase level name.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Emergency => "emergency",
            Level::Alert => "alert",
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// The marker substring searched for within a lowercased header.
    pub const fn marker(self) -> &'static str {
        match self {
            Level::Emergency => ".emergency",
            Level::Alert => ".alert",
            Level::Critical => ".critical",
            Level::Error => ".error",
            Level::Warning => ".warning",
            Level::Notice => ".notice",
            Level::Info => ".info",
            Level::Debug => ".debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Level, String> {
        match s.to_lowercase().as_str() {
            "emergency" => Ok(Level::Emergency),
            "alert" => Ok(Level::Alert),
            "critical" => Ok(Level::Critical),
            "error" => Ok(Level::Error),
            "warning" => Ok(Level::Warning),
            "notice" => Ok(Level::Notice),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(format!("unknown level {:?}", s)),
        }
    }
}

// -----------
// LevelFilter

/// Level filter for parsing and querying. `All` passes every level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    /// Does `level` satisfy this filter?
    pub fn passes(
        self,
        level: Level,
    ) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(level_) => level_ == level,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> LevelFilter {
        LevelFilter::Only(level)
    }
}

// ---------
// record_id

/// Derive the stable identity of a record from its header: the lowercase
/// hexadecimal BLAKE3 digest of the header's raw bytes.
///
/// Deterministic across calls, runs, and processes; cross-session read
/// tracking depends on this. A pure function of the header alone, so two
/// records with byte-identical headers (the same timestamp+level text
/// recurring, even in different files) collapse to one identity.
pub fn record_id(header: &str) -> RecordId {
    blake3::hash(header.as_bytes())
        .to_hex()
        .to_string()
}

// ------
// Record

/// One error/event record extracted from a log file.
///
/// A `Record` is a view over the file bytes at parse time, constructed
/// fresh on every query and immutable once constructed. Only its read-mark
/// (keyed by `id`) is persisted beyond the query lifetime.
///
/// The concatenation `header + body` appears verbatim and contiguously in
/// the source file at parse time; excision removes exactly that span.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Record {
    /// Content-derived identity; see [`record_id`].
    pub id: RecordId,
    /// Path of the file this record was parsed from.
    pub path: FPath,
    /// Severity parsed from the header marker.
    pub level: Level,
    /// Exact literal text of the matched header line, including its
    /// timestamp bracket and level marker. The match stops before the line
    /// terminator.
    pub header: String,
    /// Inner text of the first bracketed token of `header`. Stored as the
    /// raw string; not validated as a calendar date.
    pub timestamp: String,
    /// Exact literal text between the end of `header` and the start of the
    /// next header (or end of file). Since `header` stops before the line
    /// terminator, `body` begins with that newline when one is present;
    /// this keeps `header + body` contiguous in the file.
    pub body: String,
}

impl Record {
    /// Create a `Record` from passed arguments.
    ///
    /// The explicit constructor: derives `timestamp` from `header` and
    /// computes `id`. No field is populated dynamically.
    pub fn from_parts(
        path: &FPath,
        level: Level,
        header: String,
        body: String,
    ) -> Record {
        let id: RecordId = record_id(&header);
        let timestamp: String = extract_timestamp(&header);

        Record {
            id,
            path: path.clone(),
            level,
            header,
            timestamp,
            body,
        }
    }

    /// Length in bytes of the file span this record occupies.
    pub fn len(self: &Record) -> usize {
        self.header.len() + self.body.len()
    }

    pub fn is_empty(self: &Record) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }

    /// The exact file span `header + body`; the needle removed by excision.
    pub fn span(self: &Record) -> String {
        let mut span_ = String::with_capacity(self.len());
        span_.push_str(&self.header);
        span_.push_str(&self.body);

        span_
    }
}
