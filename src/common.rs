// src/common.rs
//
// common type aliases, the crate error taxonomy, and other globals
// (avoids circular imports)

extern crate thiserror;
use thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling type aliases
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// TODO: use `std::path::Path` for `FPath`
/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;
pub type FileSz = u64;

/// A general-purpose counter, used for counts of records marked or reaped.
pub type Count = u64;

/// A record identity; lowercase hexadecimal rendering of a digest of the
/// record header. See [`record_id`].
///
/// [`record_id`]: crate::data::record::record_id
pub type RecordId = String;

/// A one-based page number for paginated listings.
pub type PageNum = usize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RecordError
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// All errors surfaced by this crate. Four kinds, none retried internally;
/// retry policy, if any, belongs to the caller.
///
/// Batch operations ([`mark_all_read`], [`delete_all`]) abort on the first
/// error and discard their partial count.
///
/// [`mark_all_read`]: crate::readers::recordstore::RecordStore#method.mark_all_read
/// [`delete_all`]: crate::readers::recordstore::RecordStore#method.delete_all
#[derive(Debug, Error)]
pub enum RecordError {
    /// The log directory could not be enumerated, or a discovered log file
    /// could not be read. Aborts an entire query; no partial results.
    #[error("unable to retrieve log files from path {path:?}: {reason}")]
    SourceUnavailable { path: FPath, reason: String },

    /// The supplied date filter is not a valid point-in-time value.
    /// Raised before any file access is attempted.
    #[error("date filter {input:?} is not a valid date or Unix timestamp")]
    InvalidDateFilter { input: String },

    /// The persistent read-mark store could not be reached (or returned
    /// undecodable data). Aborts the in-progress marking or read-state
    /// check.
    #[error("read-mark store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// An excision could not persist the rewritten log file. The record is
    /// *not* considered deleted.
    #[error("unable to rewrite log file {path:?}: {reason}")]
    FileWriteFailed { path: FPath, reason: String },
}

/// [`Result`] with error type fixed to [`RecordError`].
pub type RecordResult<T> = std::result::Result<T, RecordError>;
