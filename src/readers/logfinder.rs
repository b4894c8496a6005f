// src/readers/logfinder.rs

//! Finds the log files to process and pulls their raw content.
//!
//! A [`LogFinder`] is configured with a directory, a filename stem, and a
//! [`LogNaming`] convention, and returns an ordered list of
//! [`LogFileText`] — one `(path, content)` pair per discovered file. The
//! naming convention is an explicit configuration value, not ambient
//! process state.
//!
//! [`LogFinder`]: crate::readers::logfinder::LogFinder
//! [`LogNaming`]: crate::readers::logfinder::LogNaming
//! [`LogFileText`]: crate::readers::logfinder::LogFileText

use crate::common::{FPath, FPaths, RecordError, RecordResult};
use crate::data::datetime::{NaiveDate, DATE_FILTER_FORMAT};
use crate::readers::helpers::{fpath_to_path, path_to_fpath};

use std::fs;

use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::walkdir::WalkDir;

/// Default filename stem of discovered log files, e.g. `laravel.log` or
/// `laravel-2024-01-15.log`.
pub const LOG_STEM_DEFAULT: &str = "laravel";

/// Filename extension of discovered log files.
pub const LOG_SUFFIX: &str = ".log";

/// How the log files within the directory are named.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogNaming {
    /// One current log file, `<stem>.log`.
    #[default]
    Single,
    /// One log file per day, `<stem>-YYYY-MM-DD.log`.
    Dated,
}

/// A discovered log file with its full content pulled into memory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogFileText {
    pub path: FPath,
    pub content: String,
}

/// Finds log files within one directory by filename convention.
pub struct LogFinder {
    /// The directory searched for log files.
    dir: FPath,
    /// Filename stem, [`LOG_STEM_DEFAULT`] unless overridden.
    stem: String,
    naming: LogNaming,
    /// Matches a date-suffixed filename, `<stem>-YYYY-MM-DD.log`.
    filename_dated_regex: Regex,
}

impl LogFinder {
    /// Create a `LogFinder` searching `dir` with the default stem and
    /// naming convention.
    pub fn new(dir: FPath) -> LogFinder {
        LogFinder::from_parts(dir, String::from(LOG_STEM_DEFAULT), LogNaming::default())
    }

    /// Replace the filename stem.
    pub fn with_stem(
        self,
        stem: &str,
    ) -> LogFinder {
        LogFinder::from_parts(self.dir, String::from(stem), self.naming)
    }

    /// Replace the naming convention.
    pub fn with_naming(
        self,
        naming: LogNaming,
    ) -> LogFinder {
        LogFinder::from_parts(self.dir, self.stem, naming)
    }

    fn from_parts(
        dir: FPath,
        stem: String,
        naming: LogNaming,
    ) -> LogFinder {
        let pattern: String = format!(
            r"^{}-\d{{4}}-\d{{2}}-\d{{2}}\.log$",
            ::regex::escape(&stem),
        );
        let filename_dated_regex: Regex = Regex::new(&pattern).unwrap();

        LogFinder {
            dir,
            stem,
            naming,
            filename_dated_regex,
        }
    }

    /// The directory searched for log files.
    pub fn dir(self: &LogFinder) -> &FPath {
        &self.dir
    }

    /// Return the ordered list of log files with their content.
    ///
    /// * `date` given: exactly the file `<stem>-<date>.log`, if present.
    /// * no `date`, [`LogNaming::Single`]: exactly `<stem>.log`, if
    ///   present.
    /// * no `date`, [`LogNaming::Dated`]: every `<stem>-YYYY-MM-DD.log` in
    ///   the directory, in ascending filename (thus date) order.
    ///
    /// No matching file is an empty result, not an error. A directory that
    /// cannot be enumerated, or a matching file that cannot be read, is
    /// [`RecordError::SourceUnavailable`] — the whole discovery fails with
    /// no partial results.
    pub fn discover(
        self: &LogFinder,
        date: Option<&NaiveDate>,
    ) -> RecordResult<Vec<LogFileText>> {
        defn!("({:?})", date);
        if !fpath_to_path(&self.dir).is_dir() {
            defx!("not a directory {:?}", self.dir);
            return Err(RecordError::SourceUnavailable {
                path: self.dir.clone(),
                reason: String::from("not a directory"),
            });
        }

        let paths: FPaths = match date {
            Some(date_) => {
                let name: String = format!(
                    "{}-{}{}",
                    self.stem,
                    date_.format(DATE_FILTER_FORMAT),
                    LOG_SUFFIX,
                );
                self.existing(&name)
            }
            None => match self.naming {
                LogNaming::Single => {
                    let name: String = format!("{}{}", self.stem, LOG_SUFFIX);
                    self.existing(&name)
                }
                LogNaming::Dated => self.scan_dated()?,
            },
        };
        defo!("{} file(s) to read", paths.len());

        let mut files: Vec<LogFileText> = Vec::with_capacity(paths.len());
        for path in paths.into_iter() {
            let content: String = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    defx!("read_to_string({:?}) error {}", path, err);
                    return Err(RecordError::SourceUnavailable {
                        path,
                        reason: err.to_string(),
                    });
                }
            };
            files.push(LogFileText { path, content });
        }
        defx!("return {} file(s)", files.len());

        Ok(files)
    }

    /// The path for filename `name` under the log directory, if such a
    /// file exists; zero or one entries.
    fn existing(
        self: &LogFinder,
        name: &str,
    ) -> FPaths {
        let path = fpath_to_path(&self.dir).join(name);
        match path.is_file() {
            true => vec![path_to_fpath(&path)],
            false => FPaths::new(),
        }
    }

    /// Every date-suffixed log file in the directory, ascending by
    /// filename.
    fn scan_dated(self: &LogFinder) -> RecordResult<FPaths> {
        let mut paths = FPaths::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    return Err(RecordError::SourceUnavailable {
                        path: self.dir.clone(),
                        reason: err.to_string(),
                    });
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !self.filename_dated_regex.is_match(&name) {
                continue;
            }
            paths.push(path_to_fpath(entry.path()));
        }
        // filenames embed the date so lexicographic order is date order
        paths.sort();

        Ok(paths)
    }
}
