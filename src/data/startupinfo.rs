// src/data/startupinfo.rs

//! Implements [`StartupInfo`], the accumulated state of one server startup
//! or log rotation, and [`StartupReport`], the snapshot of it that is
//! printed.

use crate::data::datetime::DateTimeLOpt;
use crate::data::logrecord::{Map, Value};

use std::fmt;

/// Is a report about a fresh process start or about a log rotation?
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StartupKind {
    /// The server process started.
    Startup,
    /// The server rotated its log file; the process was already running.
    #[default]
    Rotation,
}

impl fmt::Display for StartupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupKind::Startup => write!(f, "Start up"),
            StartupKind::Rotation => write!(f, "Log rotation"),
        }
    }
}

/// Information gathered from the startup messages of one log file pass.
///
/// Mutated in place by the [`StartupAccumulator`]. After a report is taken
/// `complete` and `is_startup` are reset so the same state awaits the next
/// startup or rotation. Identity, version and option fields are overwritten
/// by later messages, not cleared. Replica fields persist unless
/// [`clear_replica`] is called.
///
/// [`StartupAccumulator`]: crate::readers::startupaccumulator::StartupAccumulator
/// [`clear_replica`]: StartupInfo::clear_replica
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartupInfo {
    /// an actual startup, not just a log rotation
    pub is_startup: bool,
    /// the terminal "Options set by command line" message was processed
    pub complete: bool,
    /// timestamp of the triggering "MongoDB starting" or "Process Details"
    pub timestamp: DateTimeLOpt,
    pub process_id: i64,
    pub port: i64,
    pub db_path: String,
    pub host_name: String,
    pub version: String,
    pub distro: String,
    pub os: String,
    pub os_version: String,
    /// `options.config`, the configuration file path, if any
    pub config_file: Option<String>,
    pub options: Map<String, Value>,
    pub config_document: Option<String>,
    pub member_state: Option<String>,
    pub replset_config: Option<Map<String, Value>>,
    pub replset_config_document: Option<String>,
}

impl StartupInfo {
    pub fn new() -> StartupInfo {
        StartupInfo::default()
    }

    /// Has replica set membership been seen?
    pub fn has_replica(&self) -> bool {
        self.replset_config.is_some()
    }

    pub fn clear_replica(&mut self) {
        self.member_state = None;
        self.replset_config = None;
        self.replset_config_document = None;
    }

    /// Snapshot the current state as a [`StartupReport`].
    ///
    /// Does not check `complete`; see
    /// [`StartupAccumulator::take_report`].
    ///
    /// [`StartupAccumulator::take_report`]: crate::readers::startupaccumulator::StartupAccumulator::take_report
    pub fn to_report(&self) -> StartupReport {
        let replica: Option<ReplicaReport> = match self.replset_config {
            Some(_) => Some(ReplicaReport {
                member_state: self.member_state.clone().unwrap_or_default(),
                config_document: self.replset_config_document.clone().unwrap_or_default(),
            }),
            None => None,
        };

        StartupReport {
            kind: if self.is_startup { StartupKind::Startup } else { StartupKind::Rotation },
            timestamp: self.timestamp,
            host_name: self.host_name.clone(),
            port: self.port,
            db_path: self.db_path.clone(),
            process_id: self.process_id,
            version: self.version.clone(),
            distro: self.distro.clone(),
            os: self.os.clone(),
            os_version: self.os_version.clone(),
            config_file: self.config_file.clone(),
            config_document: self.config_document.clone().unwrap_or_default(),
            replica,
        }
    }
}

/// Replica set block of a [`StartupReport`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReplicaReport {
    pub member_state: String,
    pub config_document: String,
}

/// A complete startup or rotation report, ready to print.
///
/// Rendered by [`write_startup_report`].
///
/// [`write_startup_report`]: crate::printer::report::write_startup_report
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartupReport {
    pub kind: StartupKind,
    pub timestamp: DateTimeLOpt,
    pub host_name: String,
    pub port: i64,
    pub db_path: String,
    pub process_id: i64,
    pub version: String,
    pub distro: String,
    pub os: String,
    pub os_version: String,
    pub config_file: Option<String>,
    /// rendered options document; empty if rendering failed
    pub config_document: String,
    pub replica: Option<ReplicaReport>,
}
