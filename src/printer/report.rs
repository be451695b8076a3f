// src/printer/report.rs

//! The report writers: a completed [`StartupReport`], the replica set
//! configuration notice, and the lines-skipped warning.
//!
//! A report looks like
//!
//! ```text
//! Start up | host: h1 | port: 27017 | dbPath: /data/db | pid: 100 | when: Wed Jul 20 19:29:51 2022 UTC
//! Version: 6.0.1 | Platform: ubuntu2004 | OS: Linux | OS Version: 5.4
//! Config file: /etc/mongod.conf
//! config: /etc/mongod.conf
//! net:
//!   port: 27017
//!
//! Member state: PRIMARY
//! _id: rs0
//!
//! ```

use crate::data::datetime::{datetime_to_utc_string, DateTimeL};
use crate::data::startupinfo::StartupReport;
use crate::readers::startupaccumulator::ReplicaConfigNotice;

use std::io::{Result, Write};

use ::bstr::ByteSlice;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// UTC rendering of an optional timestamp; empty if `None`.
fn when(timestamp: &Option<DateTimeL>) -> String {
    match timestamp {
        Some(dt) => datetime_to_utc_string(dt),
        None => String::new(),
    }
}

/// Write a completed startup or rotation report.
///
/// A rendered document already ends with a newline, so each document is
/// followed by a blank line.
pub fn write_startup_report<W: Write>(out: &mut W, report: &StartupReport) -> Result<()> {
    defn!("({:?})", report.kind);
    writeln!(
        out,
        "{} | host: {} | port: {} | dbPath: {} | pid: {} | when: {} UTC",
        report.kind,
        report.host_name,
        report.port,
        report.db_path,
        report.process_id,
        when(&report.timestamp),
    )?;
    writeln!(
        out,
        "Version: {} | Platform: {} | OS: {} | OS Version: {}",
        report.version, report.distro, report.os, report.os_version,
    )?;
    if let Some(config_file) = &report.config_file {
        writeln!(out, "Config file: {}", config_file)?;
    }
    writeln!(out, "{}", report.config_document)?;
    if let Some(replica) = &report.replica {
        writeln!(out, "Member state: {}", replica.member_state)?;
        writeln!(out, "{}", replica.config_document)?;
    }
    defx!();

    Ok(())
}

/// Write the standalone "New replica set config" notice.
pub fn write_replica_config_notice<W: Write>(out: &mut W, notice: &ReplicaConfigNotice) -> Result<()> {
    writeln!(
        out,
        "New replica set config: {}\n{}",
        datetime_to_utc_string(&notice.timestamp),
        notice.config_document,
    )
}

/// Write the warning for a lines-skipped banner `line`.
pub fn write_lines_skipped_warning<W: Write>(out: &mut W, line: &[u8]) -> Result<()> {
    writeln!(out, "Warning: lines skipped in log file! {}", line.to_str_lossy())
}
