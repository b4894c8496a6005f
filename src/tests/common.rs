// src/tests/common.rs

//! Shared log content fixtures for _reaperlib_ tests.

/// Two records: an `error` with a stack-trace body, then an `info` with an
/// empty line-terminator body.
pub const LOG_2_RECORDS: &str = "\
[2024-01-01 00:00:00] local.ERROR: boom
Stack trace:
#0 ...
[2024-01-01 00:00:05] local.INFO: ok
";

pub const LOG_2_HEADER0: &str = "[2024-01-01 00:00:00] local.ERROR: boom";
/// The body begins with the newline that terminated the header line.
pub const LOG_2_BODY0: &str = "\nStack trace:\n#0 ...\n";
/// BLAKE3 of `LOG_2_HEADER0`; pins identity stability across processes.
pub const LOG_2_ID0: &str = "a0fffd4fe63494b31c5516a38210bf8828784889e8c0c5a012a815df061c482c";

pub const LOG_2_HEADER1: &str = "[2024-01-01 00:00:05] local.INFO: ok";
pub const LOG_2_BODY1: &str = "\n";
/// BLAKE3 of `LOG_2_HEADER1`.
pub const LOG_2_ID1: &str = "328e8b58d25d86be51a3869f01eae657dfbc4b925c4cc646137f09c69089e174";

/// Text precedes the first header; that text belongs to no record.
pub const LOG_PREAMBLE: &str = "\
started without a timestamp
[2024-03-03 10:20:30] local.WARNING: low disk
";

/// A valid timestamp bracket but no recognized level marker anywhere;
/// contributes zero records to any query result.
pub const LOG_NO_MARKER: &str = "\
[2024-01-02 03:04:05] something happened
details line
";

/// One header carrying two markers, `.ERROR` and `.debug`; emits one
/// record per matching level.
pub const LOG_MULTI_MARKER: &str = "\
[2024-02-02 01:02:03] local.ERROR: fell back to .debug mode
";

/// The same record text occurring twice, with another record in between.
pub const LOG_REPEATED: &str = "\
[2024-05-05 05:05:05] local.ERROR: flaky
retrying
[2024-05-05 06:00:00] local.NOTICE: still here
[2024-05-05 05:05:05] local.ERROR: flaky
retrying
";
