// src/readers/mod.rs

//! "Readers" for _reaperlib_.
//!
//! ## Overview of readers
//!
//! * A [`RecordStore`] drives one whole query: it uses a [`LogFinder`] to
//!   pull each candidate file's raw content, [`parse_records`] to derive
//!   records, attaches identity and source path, drops acknowledged
//!   records, and orders the result.
//! * A `LogFinder` finds the log files within the configured directory by
//!   filename convention.
//! * [`parse_records`] splits one file's content into ordered header+body
//!   records classified by severity.
//!
//! <br/>
//!
//! Processing is single-threaded, fully synchronous, blocking I/O
//! throughout; no internal parallelism, no cancellation, no timeouts. A
//! caller wanting bounded latency must wrap calls externally.
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`LogFinder`]: crate::readers::logfinder::LogFinder
//! [`parse_records`]: crate::readers::recordreader::parse_records
//! [`RecordStore`]: crate::readers::recordstore::RecordStore

pub mod helpers;
pub mod logfinder;
pub mod recordreader;
pub mod recordstore;
