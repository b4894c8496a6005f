// src/stores/readtracker.rs

//! Persistent acknowledgement state for record identities, backed by a
//! single-table [`redb`] database.
//!
//! A read-mark, once written, persists indefinitely: no expiry, no
//! versioning, never mutated, never removed. In particular, excising a
//! record's text from its log file does not touch this store, so a mark
//! can outlive its record — a later record with a byte-identical header is
//! treated as already read.
//!
//! `redb` provides per-key atomicity; there is no cross-key transaction
//! linking a read-mark to an excision.
//!
//! [`redb`]: https://docs.rs/redb/2.4.0/redb/

use crate::common::{RecordError, RecordId, RecordResult};
use crate::data::record::Record;

use std::fmt;
use std::path::Path;

use ::redb::{Database, ReadableTable, TableDefinition, TableError};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// The one table: record identity → postcard-encoded acknowledged record.
const READ_MARKS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("read_marks");

/// Map any backend failure into [`RecordError::StoreUnavailable`].
/// Propagated to the caller, never swallowed, never retried here.
fn store_err<E: fmt::Display>(err: E) -> RecordError {
    RecordError::StoreUnavailable {
        reason: err.to_string(),
    }
}

/// Records acknowledgement ("read") state for record identities.
pub struct ReadTracker {
    database: Database,
}

impl ReadTracker {
    /// Open, creating if absent, the read-mark database at `path`.
    pub fn open(path: &Path) -> RecordResult<ReadTracker> {
        defñ!("({:?})", path);
        let database: Database = Database::create(path).map_err(store_err)?;

        Ok(ReadTracker { database })
    }

    /// Acknowledge `record`: store it under its identity, forever.
    ///
    /// Idempotent get-or-insert: the first call wins. A subsequent call
    /// with the same identity does not overwrite or duplicate; it returns
    /// the originally stored record.
    pub fn mark_read(
        self: &ReadTracker,
        record: &Record,
    ) -> RecordResult<Record> {
        defn!("({:?})", record.id);
        let txn = self
            .database
            .begin_write()
            .map_err(store_err)?;
        let stored: Record;
        {
            let mut table = txn
                .open_table(READ_MARKS_TABLE)
                .map_err(store_err)?;
            let existing: Option<Vec<u8>> = table
                .get(record.id.as_str())
                .map_err(store_err)?
                .map(|guard| guard.value().to_vec());
            match existing {
                Some(bytes) => {
                    // an earlier call won; return what it stored
                    stored = postcard::from_bytes(&bytes).map_err(store_err)?;
                }
                None => {
                    let bytes: Vec<u8> = postcard::to_allocvec(record).map_err(store_err)?;
                    table
                        .insert(record.id.as_str(), bytes.as_slice())
                        .map_err(store_err)?;
                    stored = record.clone();
                }
            }
        }
        txn.commit().map_err(store_err)?;
        defx!("return {:?}", stored.id);

        Ok(stored)
    }

    /// Is `id` acknowledged? An existence check only; the stored bytes
    /// are not decoded or validated.
    pub fn is_read(
        self: &ReadTracker,
        id: &RecordId,
    ) -> RecordResult<bool> {
        let txn = self
            .database
            .begin_read()
            .map_err(store_err)?;
        let table = match txn.open_table(READ_MARKS_TABLE) {
            Ok(table) => table,
            // no mark was ever written to this database
            Err(TableError::TableDoesNotExist(_)) => return Ok(false),
            Err(err) => return Err(store_err(err)),
        };
        let found: bool = table
            .get(id.as_str())
            .map_err(store_err)?
            .is_some();

        Ok(found)
    }
}
