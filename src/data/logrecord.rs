// src/data/logrecord.rs

//! Implements the line decoder: one line of a MongoDB structured log file
//! becomes a [`LogRecord`].
//!
//! A structured log line is one JSON object, e.g.
//!
//! ```text
//! {"t":{"$date":"2022-07-20T12:29:51.886-07:00"},"s":"I","c":"CONTROL","id":20721,"ctx":"conn40413","msg":"Process Details","attr":{"pid":"16875","port":27017,"architecture":"64-bit","host":"pd3lon-mdb-07"}}
//! ```
//!
//! Only the envelope is interpreted here. The attribute bag `attr` is kept
//! as an opaque [`Value`] and is interpreted later, and only for the message
//! identities that matter, by the [`StartupAccumulator`].
//!
//! [`StartupAccumulator`]: crate::readers::startupaccumulator::StartupAccumulator

use crate::common::ResultS3;
use crate::data::datetime::{datetime_parse_record_timestamp, DateTimeL, ParseError};

use std::fmt;

#[allow(unused_imports)]
use ::bstr::ByteSlice;
use ::serde::Deserialize;
#[doc(hidden)]
pub use ::serde_json::{Map, Value};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Line prefix written by the log rotation mechanism when it omits some
/// lines from the log file. Such a line is not a record and is not an
/// error.
pub const LINES_SKIPPED_BANNER: &str = "HEADER INCLUDED, NOW SKIPPING";

/// The JSON shape of the `t` field, `{"$date": "..."}`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawTimestamp {
    #[serde(rename = "$date")]
    pub date: String,
}

/// The JSON shape of one structured log line.
///
/// Only `t` is required. A missing envelope field is empty or zero; a
/// record without a component or message is never interesting. Fields not
/// listed here are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawRecord {
    /// Timestamp
    pub t: RawTimestamp,
    /// Severity
    #[serde(default)]
    pub s: String,
    /// Component
    #[serde(default)]
    pub c: String,
    /// Context, usually a thread or connection name
    #[serde(default)]
    pub ctx: String,
    /// Unique message id
    #[serde(default)]
    pub id: i64,
    /// Message body
    #[serde(default)]
    pub msg: String,
    /// Optional: additional attributes
    #[serde(default)]
    pub attr: Option<Value>,
    /// Optional: array of tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// If truncated: truncation information
    #[serde(default)]
    pub truncated: Option<Value>,
    /// If truncated: original size of the log line
    #[serde(default)]
    pub size: Option<u64>,
}

/// A decoded structured log record with a parsed timestamp.
///
/// Exists only for the duration of processing one line.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTimeL,
    pub severity: String,
    pub component: String,
    pub context: String,
    pub id: i64,
    pub msg: String,
    pub attr: Option<Value>,
    pub tags: Vec<String>,
    pub truncated: Option<Value>,
    pub size: Option<u64>,
}

impl LogRecord {
    /// Was this log line truncated by the server?
    pub fn is_truncated(&self) -> bool {
        self.truncated.is_some()
    }

    /// The attribute bag as a JSON object, if it is one.
    pub fn attr_object(&self) -> Option<&Map<String, Value>> {
        self.attr.as_ref().and_then(Value::as_object)
    }
}

impl TryFrom<RawRecord> for LogRecord {
    type Error = DecodeError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let timestamp: DateTimeL = match datetime_parse_record_timestamp(&raw.t.date) {
            Ok(val) => val,
            Err(source) => {
                return Err(DecodeError::Timestamp { value: raw.t.date, source });
            }
        };

        Ok(LogRecord {
            timestamp,
            severity: raw.s,
            component: raw.c,
            context: raw.ctx,
            id: raw.id,
            msg: raw.msg,
            attr: raw.attr,
            tags: raw.tags.unwrap_or_default(),
            truncated: raw.truncated,
            size: raw.size,
        })
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}] {} {:?}",
            self.timestamp.to_rfc3339(),
            self.severity,
            self.component,
            self.context,
            self.id,
            self.msg,
        )
    }
}

/// A line is neither a structured log record nor the lines-skipped banner.
///
/// The underlying failure is the [`source`]; it is not repeated in the
/// `Display` text.
///
/// [`source`]: std::error::Error::source
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("error parsing log line for JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp {value:?}")]
    Timestamp {
        value: String,
        #[source]
        source: ParseError,
    },
}

/// Typed [`ResultS3`] for [`decode_line`].
///
/// - `Found` is a decoded record.
/// - `Done` is a lines-skipped banner line; skip it, it is not an error.
/// - `Err` is a line that is neither.
pub type ResultS3DecodeLine = ResultS3<LogRecord, DecodeError>;

/// Decode one line (without line ending) of a structured log file.
pub fn decode_line(line: &[u8]) -> ResultS3DecodeLine {
    defn!("({:?})", line.to_str_lossy());
    let raw: RawRecord = match serde_json::from_slice::<RawRecord>(line) {
        Ok(val) => val,
        Err(err) => {
            if line.starts_with(LINES_SKIPPED_BANNER.as_bytes()) {
                defx!("lines skipped banner, return Done");
                return ResultS3DecodeLine::Done;
            }
            defx!("return Err({})", err);
            return ResultS3DecodeLine::Err(DecodeError::Json(err));
        }
    };
    match LogRecord::try_from(raw) {
        Ok(record) => {
            defx!("return Found({})", record);

            ResultS3DecodeLine::Found(record)
        }
        Err(err) => {
            defx!("return Err({})", err);

            ResultS3DecodeLine::Err(err)
        }
    }
}
