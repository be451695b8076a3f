// src/readers/startupaccumulator.rs

//! Implements a [`StartupAccumulator`], which watches a stream of
//! [`LogRecord`]s for the startup messages of a MongoDB server and gathers
//! their fields into one [`StartupInfo`].
//!
//! The startup messages of one startup arrive in this order, though other
//! records may be interleaved:
//!
//! 1. _MongoDB starting_ (or _Process Details_ after a log rotation)
//! 2. _Build Info_
//! 3. _Operating System_
//! 4. _Options set by command line_
//!
//! Replica set membership messages may arrive at any time.
//! _Options set by command line_ is always last, so it completes the
//! `StartupInfo`. The completed `StartupInfo` is then taken as a
//! [`StartupReport`] by [`take_report`], which readies the accumulator for
//! the next startup or rotation.
//!
//! Which messages are recognized is the declarative table [`MESSAGE_RULES`],
//! gated by the configured [`Variant`].
//!
//! [`take_report`]: StartupAccumulator::take_report

use crate::common::Count;
use crate::data::attributes::{Attributes, FieldError};
use crate::data::datetime::DateTimeL;
use crate::data::document::render_map;
use crate::data::logrecord::{LogRecord, Value};
use crate::data::startupinfo::{StartupInfo, StartupReport};

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Which set of messages and components is recognized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Variant {
    /// `CONTROL` startup messages only.
    Baseline,
    /// Also `REPL` messages, log rotation (_Process Details_), and replica
    /// set membership and configuration.
    #[default]
    Extended,
}

/// Component allow-list of [`Variant::Baseline`].
pub const COMPONENTS_BASELINE: &[&str] = &["CONTROL"];

/// Component allow-list of [`Variant::Extended`].
pub const COMPONENTS_EXTENDED: &[&str] = &["CONTROL", "REPL"];

impl Variant {
    /// The default component allow-list for this variant.
    pub const fn components(&self) -> &'static [&'static str] {
        match self {
            Variant::Baseline => COMPONENTS_BASELINE,
            Variant::Extended => COMPONENTS_EXTENDED,
        }
    }
}

/// Configuration of a [`StartupAccumulator`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccumulatorConfig {
    pub variant: Variant,
    /// Records with a component not in this list are never accumulated.
    pub components: Vec<String>,
    /// Clear replica set state after every report. If `false` then replica
    /// set state from an earlier startup appears in later reports until new
    /// replica set membership is seen.
    pub clear_replica_on_report: bool,
}

impl AccumulatorConfig {
    pub fn new(variant: Variant) -> AccumulatorConfig {
        AccumulatorConfig {
            variant,
            components: variant
                .components()
                .iter()
                .map(|c| String::from(*c))
                .collect(),
            clear_replica_on_report: false,
        }
    }
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        AccumulatorConfig::new(Variant::default())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// message rules
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const MSG_MONGODB_STARTING: &str = "MongoDB starting";
pub const MSG_PROCESS_DETAILS: &str = "Process Details";
pub const MSG_BUILD_INFO: &str = "Build Info";
pub const MSG_OPERATING_SYSTEM: &str = "Operating System";
pub const MSG_REPLICA_MEMBER: &str = "Node is a member of a replica set";
pub const MSG_REPLICA_CONFIG: &str = "New replica set config in use";
pub const MSG_OPTIONS: &str = "Options set by command line";

/// The "New replica set config in use" notice. It is printed as soon as it
/// is seen and is independent of the [`StartupInfo`].
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicaConfigNotice {
    pub timestamp: DateTimeL,
    /// rendered replica set configuration; empty if rendering failed
    pub config_document: String,
}

/// The effect of [`StartupAccumulator::accumulate`] for one record.
#[derive(Clone, Debug, PartialEq)]
pub enum AccumulateResult {
    /// Not a recognized message; nothing changed.
    Ignored,
    /// Fields of the named message were merged into the `StartupInfo`.
    Merged(&'static str),
    /// The terminal message was merged; the `StartupInfo` is complete and a
    /// report may be taken.
    Complete,
    /// A standalone notice to print now.
    ReplicaConfig(ReplicaConfigNotice),
}

/// Extract the fields of one recognized message into the `StartupInfo`.
///
/// All fields are read before any is assigned, so a failed extraction
/// leaves the `StartupInfo` unchanged.
pub type ExtractFn = fn(&mut StartupInfo, &LogRecord, &Attributes) -> Result<AccumulateResult, FieldError>;

/// One recognized message identity and how to extract it.
pub struct MessageRule {
    /// exact `msg` text
    pub message: &'static str,
    /// only recognized by [`Variant::Extended`]
    pub extended_only: bool,
    pub extract: ExtractFn,
}

impl MessageRule {
    pub fn enabled_for(&self, variant: Variant) -> bool {
        !self.extended_only || variant == Variant::Extended
    }
}

impl fmt::Debug for MessageRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MessageRule")
            .field("message", &self.message)
            .field("extended_only", &self.extended_only)
            .finish()
    }
}

pub const MESSAGE_RULES_LEN: usize = 7;

/// The recognized message identities.
pub static MESSAGE_RULES: [MessageRule; MESSAGE_RULES_LEN] = [
    MessageRule {
        message: MSG_MONGODB_STARTING,
        extended_only: false,
        extract: extract_mongodb_starting,
    },
    MessageRule {
        message: MSG_PROCESS_DETAILS,
        extended_only: true,
        extract: extract_process_details,
    },
    MessageRule {
        message: MSG_BUILD_INFO,
        extended_only: false,
        extract: extract_build_info,
    },
    MessageRule {
        message: MSG_OPERATING_SYSTEM,
        extended_only: false,
        extract: extract_operating_system,
    },
    MessageRule {
        message: MSG_REPLICA_MEMBER,
        extended_only: true,
        extract: extract_replica_member,
    },
    MessageRule {
        message: MSG_REPLICA_CONFIG,
        extended_only: true,
        extract: extract_replica_config,
    },
    MessageRule {
        message: MSG_OPTIONS,
        extended_only: false,
        extract: extract_options,
    },
];

/// `{"pid": 16875, "port": 27017, "host": "h1", "dbPath": "/data/db", ...}`
fn extract_mongodb_starting(
    info: &mut StartupInfo,
    record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let process_id = attrs.integer("pid")?;
    let port = attrs.integer("port")?;
    let host_name = attrs.string("host")?;
    let db_path = attrs.string("dbPath")?;

    info.is_startup = true;
    info.timestamp = Some(record.timestamp);
    info.process_id = process_id;
    info.port = port;
    info.host_name = host_name;
    info.db_path = db_path;

    Ok(AccumulateResult::Merged(attrs.message()))
}

/// `{"pid": "16875", "port": 27017, "host": "h1", ...}`
///
/// Logged at the top of a rotated log file.
fn extract_process_details(
    info: &mut StartupInfo,
    record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let process_id = attrs.integer("pid")?;
    let port = attrs.integer("port")?;
    let host_name = attrs.string("host")?;

    info.is_startup = false;
    info.timestamp = Some(record.timestamp);
    info.process_id = process_id;
    info.port = port;
    info.host_name = host_name;

    Ok(AccumulateResult::Merged(attrs.message()))
}

/// `{"buildInfo": {"version": "6.0.1", "environment": {"distmod": "ubuntu2004", ...}, ...}}`
fn extract_build_info(
    info: &mut StartupInfo,
    _record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let version = attrs.string("buildInfo.version")?;
    // macOS and community source builds do not have a `distmod`
    let distro = attrs
        .string_opt("buildInfo.environment.distmod")?
        .unwrap_or_default();

    info.version = version;
    info.distro = distro;

    Ok(AccumulateResult::Merged(attrs.message()))
}

/// `{"os": {"name": "Ubuntu", "version": "20.04"}}`
fn extract_operating_system(
    info: &mut StartupInfo,
    _record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let os = attrs.string("os.name")?;
    let os_version = attrs.string("os.version")?;

    info.os = os;
    info.os_version = os_version;

    Ok(AccumulateResult::Merged(attrs.message()))
}

/// `{"memberState": "PRIMARY", "config": {"_id": "rs0", ...}}`
fn extract_replica_member(
    info: &mut StartupInfo,
    _record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let member_state = attrs.string("memberState")?;
    let config = attrs.object("config")?;
    let config_document = render_map(&config);

    info.member_state = Some(member_state);
    info.replset_config = Some(config);
    info.replset_config_document = config_document;

    Ok(AccumulateResult::Merged(attrs.message()))
}

/// `{"config": {"_id": "rs0", ...}}`
///
/// Does not change the `StartupInfo`.
fn extract_replica_config(
    _info: &mut StartupInfo,
    record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let config = attrs.object("config")?;
    let config_document = render_map(&config).unwrap_or_default();

    Ok(AccumulateResult::ReplicaConfig(ReplicaConfigNotice {
        timestamp: record.timestamp,
        config_document,
    }))
}

/// `{"options": {"config": "/etc/mongod.conf", "net": {...}, ...}}`
fn extract_options(
    info: &mut StartupInfo,
    _record: &LogRecord,
    attrs: &Attributes,
) -> Result<AccumulateResult, FieldError> {
    let options = attrs.object("options")?;
    // mongod may be started without a configuration file
    let config_file = attrs.string_opt("options.config")?;
    let config_document = render_map(&options);

    info.config_file = config_file;
    info.options = options;
    info.config_document = config_document;
    info.complete = true;

    Ok(AccumulateResult::Complete)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// StartupAccumulator
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Gathers [`StartupInfo`] from a stream of [`LogRecord`]s.
///
/// One `StartupAccumulator` is owned by one file pass. It is the only
/// holder of the `StartupInfo`.
pub struct StartupAccumulator {
    config: AccumulatorConfig,
    info: StartupInfo,
    /// `Count` of records merged, all rules.
    pub(crate) merged: Count,
    /// `Count` of reports taken.
    pub(crate) reports: Count,
}

impl fmt::Debug for StartupAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StartupAccumulator")
            .field("config", &self.config)
            .field("complete", &self.info.complete)
            .field("is_startup", &self.info.is_startup)
            .field("merged", &self.merged)
            .field("reports", &self.reports)
            .finish()
    }
}

impl StartupAccumulator {
    pub fn new(config: AccumulatorConfig) -> StartupAccumulator {
        defñ!("({:?})", config);
        StartupAccumulator {
            config,
            info: StartupInfo::new(),
            merged: 0,
            reports: 0,
        }
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    pub fn info(&self) -> &StartupInfo {
        &self.info
    }

    pub fn is_complete(&self) -> bool {
        self.info.complete
    }

    pub fn count_merged(&self) -> Count {
        self.merged
    }

    pub fn count_reports(&self) -> Count {
        self.reports
    }

    /// The [`MessageRule`] that applies to `record`, if any.
    ///
    /// A record is interesting only if it has an attribute bag, its
    /// component is in the allow-list, and its message text is recognized
    /// by the configured variant.
    pub fn rule_for(&self, record: &LogRecord) -> Option<&'static MessageRule> {
        self.rule_and_attr(record).map(|(rule, _attr)| rule)
    }

    /// The [`MessageRule`] that applies to `record` and the attribute bag
    /// the rule reads.
    fn rule_and_attr<'r>(&self, record: &'r LogRecord) -> Option<(&'static MessageRule, &'r Value)> {
        let attr: &Value = match record.attr.as_ref() {
            None | Some(Value::Null) => return None,
            Some(attr) => attr,
        };
        if !self
            .config
            .components
            .iter()
            .any(|c| c == &record.component)
        {
            return None;
        }
        let variant = self.config.variant;

        MESSAGE_RULES
            .iter()
            .find(|rule| rule.message == record.msg && rule.enabled_for(variant))
            .map(|rule| (rule, attr))
    }

    /// Merge the relevant fields of `record`, if it is interesting.
    ///
    /// An interesting record whose attribute bag does not have the expected
    /// shape is a [`FieldError`]; the `StartupInfo` is unchanged.
    pub fn accumulate(&mut self, record: &LogRecord) -> Result<AccumulateResult, FieldError> {
        let (rule, attr): (&MessageRule, &Value) = match self.rule_and_attr(record) {
            Some(found) => found,
            None => return Ok(AccumulateResult::Ignored),
        };
        defn!("({:?})", rule.message);
        let attrs = Attributes::new(rule.message, attr)?;
        let result = (rule.extract)(&mut self.info, record, &attrs)?;
        self.merged += 1;
        defx!("return {:?}", result);

        Ok(result)
    }

    /// Take the completed [`StartupInfo`] as a [`StartupReport`].
    ///
    /// Returns `None`, and changes nothing, if the `StartupInfo` is not
    /// complete. Otherwise resets `complete` and `is_startup` so the
    /// accumulator awaits the next startup or rotation, and clears the
    /// replica set state if so configured.
    pub fn take_report(&mut self) -> Option<StartupReport> {
        if !self.info.complete {
            return None;
        }
        defn!();
        let report = self.info.to_report();
        self.info.complete = false;
        self.info.is_startup = false;
        if self.config.clear_replica_on_report {
            self.info.clear_replica();
        }
        self.reports += 1;
        defx!("reports {}", self.reports);

        Some(report)
    }
}
