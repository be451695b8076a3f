// src/printer/summary.rs

//! Write the [`PassSummary`] at the end of a log file pass.
//!
//! [`PassSummary`]: crate::readers::summary::PassSummary

use crate::data::datetime::{
    datetime_to_utc_string,
    duration_to_string,
    utc_offset_hours_minutes,
};
use crate::readers::summary::PassSummary;

use std::io::{Result, Write};

/// Write the summary of one log file pass:
///
/// ```text
/// 6 lines in log file /var/log/mongodb/mongod.log
/// Log file timezone is UTC -7 hours 0 minutes
/// UTC time range in log file: Wed Jul 20 19:29:51 2022 -to- Wed Jul 20 19:30:02 2022 (11.2s)
/// Records: 5 | Banner lines: 1 | Truncated records: 0 | Reports: 1
/// ```
///
/// A log file without records has no time range.
pub fn write_pass_summary<W: Write>(out: &mut W, summary: &PassSummary) -> Result<()> {
    writeln!(out, "{} lines in log file {}", summary.lines, summary.path)?;
    match (summary.earliest, summary.latest, summary.duration()) {
        (Some(earliest), Some(latest), Some(duration)) => {
            let (hours, minutes) = utc_offset_hours_minutes(earliest.offset());
            writeln!(out, "Log file timezone is UTC {} hours {} minutes", hours, minutes)?;
            writeln!(
                out,
                "UTC time range in log file: {} -to- {} ({})",
                datetime_to_utc_string(&earliest),
                datetime_to_utc_string(&latest),
                duration_to_string(&duration),
            )?;
        }
        _ => {
            writeln!(out, "No timestamped log records in log file {}", summary.path)?;
        }
    }
    writeln!(
        out,
        "Records: {} | Banner lines: {} | Truncated records: {} | Reports: {}",
        summary.records, summary.banners, summary.truncated, summary.reports,
    )
}
