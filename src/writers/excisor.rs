// src/writers/excisor.rs

//! Removes a record's exact text span from its originating log file.
//!
//! The rewrite is a whole-file read, an in-memory removal of every literal
//! occurrence of `header + body`, and a whole-file overwrite. There is no
//! file lock and no temp-file-plus-rename: two concurrent excisions of the
//! same file can lose one of the writes (last writer wins), and a
//! concurrent query can observe a half-written file. Callers needing
//! crash safety must provide it externally.
//!
//! Excision never touches the read-mark store; a record's mark outlives
//! its deletion from the file.

use crate::common::{RecordError, RecordResult};
use crate::data::record::Record;

use std::fmt;
use std::fs;

use ::memchr::memmem;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

fn write_err<E: fmt::Display>(
    record: &Record,
    err: E,
) -> RecordError {
    RecordError::FileWriteFailed {
        path: record.path.clone(),
        reason: err.to_string(),
    }
}

/// Remove every literal occurrence of `record.header + record.body` from
/// the file at `record.path`, then rewrite the file with the resulting
/// content in full.
///
/// Removal is not limited to the first match: identical header+body text
/// occurring elsewhere in the file is removed as well. On any failure the
/// file is left as-is and the record is *not* considered deleted.
pub fn excise(record: &Record) -> RecordResult<()> {
    defn!("({:?} from {:?})", record.id, record.path);
    let content: String = match fs::read_to_string(&record.path) {
        Ok(content) => content,
        Err(err) => {
            defx!("read_to_string({:?}) error {}", record.path, err);
            return Err(write_err(record, err));
        }
    };

    let needle: String = record.span();
    if needle.is_empty() {
        // an empty span matches everywhere; nothing to remove
        defx!("empty span");
        return Ok(());
    }
    let finder = memmem::Finder::new(needle.as_bytes());
    let mut rewritten: String = String::with_capacity(content.len());
    let mut at: usize = 0;
    let mut occurrences: usize = 0;
    while let Some(found) = finder.find(content[at..].as_bytes()) {
        // `found` is relative to `at`; a match of whole-`char` UTF-8 text
        // always lands on a `char` boundary
        rewritten.push_str(&content[at..at + found]);
        at += found + needle.len();
        occurrences += 1;
    }
    rewritten.push_str(&content[at..]);
    defo!("removed {} occurrence(s) of {} byte span", occurrences, needle.len());

    match fs::write(&record.path, rewritten.as_bytes()) {
        Ok(_) => {}
        Err(err) => {
            defx!("write({:?}) error {}", record.path, err);
            return Err(write_err(record, err));
        }
    }
    defx!();

    Ok(())
}
