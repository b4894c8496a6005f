// src/data/mod.rs

//! The `data` module is specialized data containers: the [`Record`]
//! extracted from a log file, its [`Level`] classification, and the
//! datetime helpers for date filters and header timestamps.
//!
//! [`Record`]: crate::data::record::Record
//! [`Level`]: crate::data::record::Level

pub mod datetime;
pub mod record;
