// src/tests/common.rs

//! Shared log lines and values for tests.

#![allow(dead_code)]

use crate::data::datetime::{DateTimeL, FixedOffset, TimeZone};
use crate::data::logrecord::{decode_line, LogRecord, ResultS3DecodeLine};

use ::lazy_static::lazy_static;

lazy_static! {
    pub static ref FO_0: FixedOffset = FixedOffset::east_opt(0).unwrap();
    pub static ref FO_M7: FixedOffset = FixedOffset::west_opt(7 * 3600).unwrap();
    pub static ref FO_P530: FixedOffset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    pub static ref FO_M330: FixedOffset = FixedOffset::west_opt(3 * 3600 + 30 * 60).unwrap();
}

/// Build a `DateTimeL` at offset `fo`.
pub fn ymdhmsm(
    fo: &FixedOffset,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    milli: i64,
) -> DateTimeL {
    fo.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap()
        + chrono::Duration::milliseconds(milli)
}

/// Build one structured log line.
pub fn log_line(date: &str, component: &str, msg: &str, attr: Option<&str>) -> String {
    match attr {
        Some(attr) => format!(
            r#"{{"t":{{"$date":"{}"}},"s":"I","c":"{}","id":1,"ctx":"initandlisten","msg":"{}","attr":{}}}"#,
            date, component, msg, attr
        ),
        None => format!(
            r#"{{"t":{{"$date":"{}"}},"s":"I","c":"{}","id":1,"ctx":"initandlisten","msg":"{}"}}"#,
            date, component, msg
        ),
    }
}

/// Decode a line that must be a record.
pub fn record(line: &str) -> LogRecord {
    match decode_line(line.as_bytes()) {
        ResultS3DecodeLine::Found(record) => record,
        ResultS3DecodeLine::Done => panic!("banner, not a record: {:?}", line),
        ResultS3DecodeLine::Err(err) => panic!("decode_line({:?}) failed {}", line, err),
    }
}

pub const LINE_STARTING: &str = r#"{"t":{"$date":"2022-07-20T12:29:51.886-07:00"},"s":"I","c":"CONTROL","id":4615611,"ctx":"initandlisten","msg":"MongoDB starting","attr":{"pid":100,"port":27017,"dbPath":"/data/db","architecture":"64-bit","host":"h1"}}"#;
pub const LINE_BUILD_INFO: &str = r#"{"t":{"$date":"2022-07-20T12:29:51.887-07:00"},"s":"I","c":"CONTROL","id":23403,"ctx":"initandlisten","msg":"Build Info","attr":{"buildInfo":{"version":"6.0.1","gitVersion":"32f0f9c88dc44a2c8073a5bd47cf779d4bfdee6b","environment":{"distmod":"ubuntu2004","distarch":"x86_64","target_arch":"x86_64"}}}}"#;
pub const LINE_OPERATING_SYSTEM: &str = r#"{"t":{"$date":"2022-07-20T12:29:51.888-07:00"},"s":"I","c":"CONTROL","id":51765,"ctx":"initandlisten","msg":"Operating System","attr":{"os":{"name":"Linux","version":"5.4"}}}"#;
pub const LINE_REPLICA_MEMBER: &str = r#"{"t":{"$date":"2022-07-20T12:29:52.000-07:00"},"s":"I","c":"REPL","id":21392,"ctx":"initandlisten","msg":"Node is a member of a replica set","attr":{"memberState":"PRIMARY","config":{"_id":"rs0"}}}"#;
pub const LINE_OPTIONS: &str = r#"{"t":{"$date":"2022-07-20T12:29:52.500-07:00"},"s":"I","c":"CONTROL","id":21951,"ctx":"initandlisten","msg":"Options set by command line","attr":{"options":{"config":"/etc/mongod.conf","net":{"port":27017}}}}"#;
pub const LINE_BANNER: &str = "HEADER INCLUDED, NOW SKIPPING 2167 LINES";

/// The six lines of one complete startup.
pub const LINES_STARTUP: [&str; 6] = [
    LINE_STARTING,
    LINE_BUILD_INFO,
    LINE_OPERATING_SYSTEM,
    LINE_REPLICA_MEMBER,
    LINE_OPTIONS,
    LINE_BANNER,
];

pub const LINE_PROCESS_DETAILS: &str = r#"{"t":{"$date":"2022-07-21T00:00:00.123-07:00"},"s":"I","c":"CONTROL","id":20721,"ctx":"conn40413","msg":"Process Details","attr":{"pid":"16875","port":27018,"architecture":"64-bit","host":"pd3lon-mdb-07"}}"#;
pub const LINE_REPLICA_CONFIG: &str = r#"{"t":{"$date":"2022-07-20T12:30:00.000-07:00"},"s":"I","c":"REPL","id":21392,"ctx":"ReplCoord-0","msg":"New replica set config in use","attr":{"config":{"_id":"rs0","version":2}}}"#;
pub const LINE_CONNECTION: &str = r#"{"t":{"$date":"2022-07-20T12:29:53.000-07:00"},"s":"I","c":"NETWORK","id":22943,"ctx":"listener","msg":"Connection accepted","attr":{"remote":"127.0.0.1:50000","connectionCount":1}}"#;
pub const LINE_TRUNCATED: &str = r#"{"t":{"$date":"2022-07-20T12:29:54.000-07:00"},"s":"I","c":"COMMAND","id":51803,"ctx":"conn1","msg":"Slow query","attr":{"ns":"test.c"},"truncated":{"command":{"filter":{"type":"string","size":5000}}},"size":12345}"#;

/// Rendered options document of [`LINE_OPTIONS`].
pub const DOC_OPTIONS: &str = "config: /etc/mongod.conf\nnet:\n  port: 27017\n";
/// Rendered replica set configuration of [`LINE_REPLICA_MEMBER`].
pub const DOC_REPLICA: &str = "_id: rs0\n";

/// Report written for [`LINES_STARTUP`].
pub const REPORT_STARTUP: &str = "\
Start up | host: h1 | port: 27017 | dbPath: /data/db | pid: 100 | when: Wed Jul 20 19:29:51 2022 UTC
Version: 6.0.1 | Platform: ubuntu2004 | OS: Linux | OS Version: 5.4
Config file: /etc/mongod.conf
config: /etc/mongod.conf
net:
  port: 27017

Member state: PRIMARY
_id: rs0

";
