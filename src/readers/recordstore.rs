// src/readers/recordstore.rs

//! Implements a [`RecordStore`], the driver of one whole query over the
//! configured log files.
//!
//! A query pulls the raw content of every candidate file from the
//! [`LogFinder`], derives records with [`parse_records`], attaches source
//! path and identity, consults the [`ReadTracker`] to drop acknowledged
//! records, and returns one ordered collection. The derived operations
//! ([`find`], [`mark_all_read`], [`delete_all`]) each re-run the full
//! query; there is no shared snapshot, so callers must not assume one
//! operation sees the same data as a prior one.
//!
//! Within one `query` invocation, results are deterministic given
//! unchanged file content and unchanged read-tracking state.
//!
//! [`LogFinder`]: crate::readers::logfinder::LogFinder
//! [`parse_records`]: crate::readers::recordreader::parse_records
//! [`ReadTracker`]: crate::stores::readtracker::ReadTracker
//! [`find`]: RecordStore#method.find
//! [`mark_all_read`]: RecordStore#method.mark_all_read
//! [`delete_all`]: RecordStore#method.delete_all

use crate::common::{Count, PageNum, RecordId, RecordResult};
use crate::data::datetime::NaiveDate;
use crate::data::record::{LevelFilter, Record};
use crate::readers::logfinder::{LogFileText, LogFinder};
use crate::readers::recordreader::{parse_records, ParsedRecord};
use crate::stores::readtracker::ReadTracker;
use crate::writers::excisor::excise;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// QueryOptions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Direction of the final ordered query result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OrderDirection {
    /// File-list order, per-file appearance order.
    #[default]
    Ascending,
    /// The exact reverse of `Ascending`.
    Descending,
}

/// Explicit immutable options for one [`query`] invocation.
///
/// Build a value at the call site with the `with_*` methods; the store
/// itself holds no query configuration.
///
/// ```
/// use reaperlib::data::record::{Level, LevelFilter};
/// use reaperlib::readers::recordstore::QueryOptions;
///
/// let options = QueryOptions::default()
///     .with_level(LevelFilter::Only(Level::Error))
///     .with_include_read(true);
/// assert_eq!(options.level, LevelFilter::Only(Level::Error));
/// ```
///
/// [`query`]: RecordStore#method.query
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryOptions {
    /// Severity filter; default every level.
    pub level: LevelFilter,
    /// Match only the log file for this date; `None` matches every file
    /// the finder returns.
    pub date: Option<NaiveDate>,
    /// Also return records already marked read; default `false`.
    pub include_read: bool,
    /// Direction of the returned sequence; default ascending.
    pub order: OrderDirection,
}

impl QueryOptions {
    pub fn with_level(
        mut self,
        level: LevelFilter,
    ) -> QueryOptions {
        self.level = level;
        self
    }

    pub fn with_date(
        mut self,
        date: NaiveDate,
    ) -> QueryOptions {
        self.date = Some(date);
        self
    }

    pub fn with_include_read(
        mut self,
        include_read: bool,
    ) -> QueryOptions {
        self.include_read = include_read;
        self
    }

    pub fn with_order(
        mut self,
        order: OrderDirection,
    ) -> QueryOptions {
        self.order = order;
        self
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RecordStore
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The query façade over a [`LogFinder`] and a [`ReadTracker`].
///
/// [`LogFinder`]: crate::readers::logfinder::LogFinder
/// [`ReadTracker`]: crate::stores::readtracker::ReadTracker
pub struct RecordStore {
    finder: LogFinder,
    tracker: ReadTracker,
}

impl RecordStore {
    pub fn new(
        finder: LogFinder,
        tracker: ReadTracker,
    ) -> RecordStore {
        RecordStore { finder, tracker }
    }

    /// Run one query and return the ordered collection of matching
    /// records.
    ///
    /// Discovery failure aborts the whole query with no partial results.
    /// Unless `options.include_read`, every record whose identity is
    /// acknowledged is dropped. `OrderDirection::Descending` reverses the
    /// final concatenated sequence.
    pub fn query(
        self: &RecordStore,
        options: &QueryOptions,
    ) -> RecordResult<Vec<Record>> {
        defn!("({:?})", options);
        let files: Vec<LogFileText> = self
            .finder
            .discover(options.date.as_ref())?;

        let mut records: Vec<Record> = Vec::new();
        for file in files.iter() {
            let parsed: Vec<ParsedRecord> = parse_records(&file.content, options.level);
            defo!("{} record(s) parsed from {:?}", parsed.len(), file.path);
            for parsed_ in parsed.into_iter() {
                let record = Record::from_parts(
                    &file.path,
                    parsed_.level,
                    parsed_.header,
                    parsed_.body,
                );
                if !options.include_read && self.tracker.is_read(&record.id)? {
                    continue;
                }
                records.push(record);
            }
        }
        match options.order {
            OrderDirection::Ascending => {}
            OrderDirection::Descending => records.reverse(),
        }
        defx!("return {} record(s)", records.len());

        Ok(records)
    }

    /// Find a record by identity: linear scan of a fresh query with every
    /// option at its default (level ALL), returning the first match.
    pub fn find(
        self: &RecordStore,
        id: &RecordId,
    ) -> RecordResult<Option<Record>> {
        defñ!("({:?})", id);
        let options = QueryOptions::default();
        let records: Vec<Record> = self.query(&options)?;

        Ok(records
            .into_iter()
            .find(|record| &record.id == id))
    }

    /// Mark every record matching `options` as read; return the count
    /// marked.
    ///
    /// The count increments only on success. Any store failure aborts the
    /// remaining batch and surfaces the error; the partial count is
    /// discarded — the whole batch is considered failed.
    pub fn mark_all_read(
        self: &RecordStore,
        options: &QueryOptions,
    ) -> RecordResult<Count> {
        defn!("({:?})", options);
        let records: Vec<Record> = self.query(options)?;

        let mut count: Count = 0;
        for record in records.iter() {
            self.tracker.mark_read(record)?;
            count += 1;
        }
        defx!("return {}", count);

        Ok(count)
    }

    /// Excise every record matching `options` from its backing file;
    /// return the count excised.
    ///
    /// Same all-or-nothing policy as [`mark_all_read`]: a failed excision
    /// aborts the remaining batch and the partial count is discarded.
    ///
    /// [`mark_all_read`]: RecordStore#method.mark_all_read
    pub fn delete_all(
        self: &RecordStore,
        options: &QueryOptions,
    ) -> RecordResult<Count> {
        defn!("({:?})", options);
        let records: Vec<Record> = self.query(options)?;

        let mut count: Count = 0;
        for record in records.iter() {
            excise(record)?;
            count += 1;
        }
        defx!("return {}", count);

        Ok(count)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// pagination
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Default count of records per page for [`paginate`].
pub const PER_PAGE_DEFAULT: usize = 25;

/// Interpret an optional page-number input, e.g. a query-string value.
/// Absent, non-numeric, or non-positive input defaults to page 1.
pub fn page_from_input(input: Option<&str>) -> PageNum {
    match input {
        Some(input_) => match input_.trim().parse::<PageNum>() {
            Ok(page) if page >= 1 => page,
            _ => 1,
        },
        None => 1,
    }
}

/// One page of query results plus the total count before slicing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    pub page: PageNum,
    pub per_page: usize,
    /// Count of records before slicing.
    pub total: usize,
    pub records: Vec<Record>,
}

/// Slice `records` into one page: offset `(page - 1) * per_page`, slice
/// length `per_page`. A page past the end is empty, not an error.
pub fn paginate(
    records: Vec<Record>,
    page: PageNum,
    per_page: usize,
) -> Page {
    defñ!("(page {}, per_page {})", page, per_page);
    let total: usize = records.len();
    let offset: usize = page
        .saturating_sub(1)
        .saturating_mul(per_page);
    let records_: Vec<Record> = records
        .into_iter()
        .skip(offset)
        .take(per_page)
        .collect();

    Page {
        page,
        per_page,
        total,
        records: records_,
    }
}
