// src/bin/logreaper.rs

//! Driver program _logreaper_.
//!
//! Lists, finds, acknowledges, and reaps log records using _reaperlib_.

use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use ::anyhow::{anyhow, Context};
use ::clap::{Parser, Subcommand};
use ::const_format::concatcp;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use ::reaperlib::common::{Count, FPath};
use ::reaperlib::data::datetime::parse_date_filter;
use ::reaperlib::data::record::{Level, LevelFilter, Record};
use ::reaperlib::readers::logfinder::{LogFinder, LogNaming, LOG_STEM_DEFAULT};
use ::reaperlib::readers::recordstore::{
    page_from_input,
    paginate,
    OrderDirection,
    Page,
    QueryOptions,
    RecordStore,
    PER_PAGE_DEFAULT,
};
use ::reaperlib::stores::readtracker::ReadTracker;

/// Default file name of the read-mark database, created within the log
/// directory unless `--marks` overrides it.
const MARKS_FILENAME_DEFAULT: &str = ".read-marks.redb";

const CLI_HELP_AFTER: &str = "\
Levels are the eight severity markers: emergency, alert, critical, error,
warning, notice, info, debug. Pass --level all (or no --level) to match
every level.

A --date value is a day, \"YYYY-MM-DD\", or a Unix timestamp in seconds;
it selects the single log file for that day.

A record's identity is printed with the record; pass it to `find` to
retrieve the record again.";

/// clap command-line arguments build-time definitions.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "logreaper",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(log record reaper)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"),
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
#[allow(non_camel_case_types)]
struct CLI_Args {
    /// Directory of the log files.
    #[clap(
        short = 'l',
        long,
        default_value = "./logs",
    )]
    logs: String,

    /// Filename stem of the log files; "laravel" matches "laravel.log"
    /// and "laravel-2024-01-15.log".
    #[clap(
        long,
        default_value = LOG_STEM_DEFAULT,
    )]
    stem: String,

    /// The log directory holds one dated file per day,
    /// "<stem>-YYYY-MM-DD.log", instead of a single "<stem>.log".
    #[clap(long)]
    dated: bool,

    /// Path of the read-mark database.
    /// Defaults to ".read-marks.redb" within the log directory.
    #[clap(
        short = 'm',
        long,
        verbatim_doc_comment,
    )]
    marks: Option<String>,

    #[clap(subcommand)]
    command: CLI_Command,
}

#[derive(Subcommand, Debug)]
#[allow(non_camel_case_types)]
enum CLI_Command {
    /// Print matching records, one page at a time.
    List {
        /// Only records of this severity level.
        #[clap(short = 'e', long)]
        level: Option<String>,

        /// Only the log file for this date.
        #[clap(short = 'd', long)]
        date: Option<String>,

        /// Include records already marked read.
        #[clap(short = 'i', long)]
        include_read: bool,

        /// Newest records first.
        #[clap(short = 'r', long)]
        reverse: bool,

        /// Page number. Absent or not a positive number means page 1.
        #[clap(short = 'p', long)]
        page: Option<String>,

        /// Records per page.
        #[clap(long, default_value_t = PER_PAGE_DEFAULT)]
        per_page: usize,
    },

    /// Print one record by its identity.
    Find {
        /// The record identity as printed by `list`.
        id: String,
    },

    /// Mark all matching records read; print the count marked.
    MarkRead {
        /// Only records of this severity level.
        #[clap(short = 'e', long)]
        level: Option<String>,

        /// Only the log file for this date.
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// Remove all matching records from their log files; print the count
    /// removed. Records already marked read are skipped unless
    /// --include-read.
    Reap {
        /// Only records of this severity level.
        #[clap(short = 'e', long)]
        level: Option<String>,

        /// Only the log file for this date.
        #[clap(short = 'd', long)]
        date: Option<String>,

        /// Also remove records already marked read.
        #[clap(short = 'i', long)]
        include_read: bool,
    },
}

/// Interpret an optional `--level` value; absent or "all" passes every
/// level.
fn cli_level_filter(level: &Option<String>) -> anyhow::Result<LevelFilter> {
    match level {
        None => Ok(LevelFilter::All),
        Some(level_) if level_.eq_ignore_ascii_case("all") => Ok(LevelFilter::All),
        Some(level_) => Level::from_str(level_)
            .map(LevelFilter::Only)
            .map_err(|err| anyhow!(err)),
    }
}

/// Assemble the `QueryOptions` for one subcommand invocation.
fn cli_query_options(
    level: &Option<String>,
    date: &Option<String>,
    include_read: bool,
    reverse: bool,
) -> anyhow::Result<QueryOptions> {
    let mut options = QueryOptions::default()
        .with_level(cli_level_filter(level)?)
        .with_include_read(include_read);
    if reverse {
        options = options.with_order(OrderDirection::Descending);
    }
    if let Some(date_) = date {
        // raised before any file access is attempted
        options = options.with_date(parse_date_filter(date_)?);
    }

    Ok(options)
}

fn print_record(record: &Record) {
    println!("{} {} {}", record.id, record.level, record.path);
    print!("{}{}", record.header, record.body);
    if !record.body.ends_with('\n') {
        println!();
    }
}

fn run(args: CLI_Args) -> anyhow::Result<()> {
    defn!("({:?})", args);
    let marks: FPath = match &args.marks {
        Some(marks_) => marks_.clone(),
        None => format!("{}/{}", args.logs, MARKS_FILENAME_DEFAULT),
    };
    let naming: LogNaming = match args.dated {
        true => LogNaming::Dated,
        false => LogNaming::Single,
    };
    let finder: LogFinder = LogFinder::new(args.logs.clone())
        .with_stem(&args.stem)
        .with_naming(naming);
    let tracker: ReadTracker = ReadTracker::open(Path::new(&marks))
        .with_context(|| format!("opening read-mark database {:?}", marks))?;
    let store: RecordStore = RecordStore::new(finder, tracker);

    match &args.command {
        CLI_Command::List {
            level,
            date,
            include_read,
            reverse,
            page,
            per_page,
        } => {
            let options = cli_query_options(level, date, *include_read, *reverse)?;
            let records: Vec<Record> = store.query(&options)?;
            let page_: Page = paginate(records, page_from_input(page.as_deref()), *per_page);
            println!(
                "page {} ({} per page) of {} record(s)",
                page_.page, page_.per_page, page_.total,
            );
            for record in page_.records.iter() {
                print_record(record);
            }
        }
        CLI_Command::Find { id } => {
            match store.find(id)? {
                Some(record) => print_record(&record),
                None => {
                    return Err(anyhow!("no record with identity {:?}", id));
                }
            }
        }
        CLI_Command::MarkRead { level, date } => {
            let options = cli_query_options(level, date, false, false)?;
            let count: Count = store.mark_all_read(&options)?;
            println!("{} record(s) marked read", count);
        }
        CLI_Command::Reap {
            level,
            date,
            include_read,
        } => {
            let options = cli_query_options(level, date, *include_read, false)?;
            let count: Count = store.delete_all(&options)?;
            println!("{} record(s) reaped", count);
        }
    }
    defx!();

    Ok(())
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    let args = CLI_Args::parse();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
