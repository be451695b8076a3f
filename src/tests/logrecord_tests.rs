// src/tests/logrecord_tests.rs

//! tests for `logrecord.rs`

use crate::data::logrecord::{decode_line, DecodeError, LogRecord, ResultS3DecodeLine, Value, LINES_SKIPPED_BANNER};
use crate::tests::common::{
    log_line,
    record,
    ymdhmsm,
    FO_0,
    FO_M7,
    LINE_BANNER,
    LINE_PROCESS_DETAILS,
    LINE_STARTING,
    LINE_TRUNCATED,
};

use ::test_case::test_case;

#[test]
fn test_decode_line_record() {
    let rec: LogRecord = record(LINE_STARTING);
    assert_eq!(rec.timestamp, ymdhmsm(&FO_M7, 2022, 7, 20, 12, 29, 51, 886));
    assert_eq!(rec.severity, "I");
    assert_eq!(rec.component, "CONTROL");
    assert_eq!(rec.context, "initandlisten");
    assert_eq!(rec.id, 4615611);
    assert_eq!(rec.msg, "MongoDB starting");
    assert!(rec.attr_object().is_some());
    assert_eq!(rec.attr_object().unwrap().get("host"), Some(&Value::from("h1")));
    assert!(rec.tags.is_empty());
    assert!(!rec.is_truncated());
    assert_eq!(rec.size, None);
}

#[test]
fn test_decode_line_truncated() {
    let rec: LogRecord = record(LINE_TRUNCATED);
    assert!(rec.is_truncated());
    assert_eq!(rec.size, Some(12345));
}

#[test]
fn test_decode_line_tags_and_unknown_fields() {
    let line = r#"{"t":{"$date":"2022-07-20T12:29:51.886Z"},"s":"W","c":"STORAGE","id":22120,"ctx":"initandlisten","msg":"Access control is not enabled","tags":["startupWarnings"],"extra":{"a":1}}"#;
    let rec: LogRecord = record(line);
    assert_eq!(rec.tags, vec!["startupWarnings".to_string()]);
    assert_eq!(rec.attr, None);
    assert_eq!(rec.attr_object(), None);
}

#[test]
fn test_decode_line_attr_not_object() {
    let rec: LogRecord = record(&log_line("2022-07-20T12:29:51Z", "CONTROL", "x", Some("[1,2]")));
    assert!(rec.attr.is_some());
    assert_eq!(rec.attr_object(), None);
}

#[test]
fn test_decode_line_banner() {
    assert!(LINE_BANNER.starts_with(LINES_SKIPPED_BANNER));
    assert!(decode_line(LINE_BANNER.as_bytes()).is_done());
    assert!(decode_line(LINES_SKIPPED_BANNER.as_bytes()).is_done());
}

#[test_case(""; "empty")]
#[test_case("not json at all"; "text")]
#[test_case("{\"t\":"; "cut short")]
#[test_case("[]"; "array")]
#[test_case(r#"{"s":"I","c":"CONTROL","id":1,"ctx":"main","msg":"m"}"#; "missing t")]
#[test_case(r#"{"t":{"$date":"2022-07-20T12:29:51Z"},"s":"I","c":"CONTROL","id":"1","ctx":"main","msg":"m"}"#; "id string")]
#[test_case(" HEADER INCLUDED, NOW SKIPPING"; "banner not at start")]
fn test_decode_line_json_error(line: &str) {
    match decode_line(line.as_bytes()) {
        ResultS3DecodeLine::Err(DecodeError::Json(_)) => {}
        result => panic!("expected Err(Json) for {:?}, got {:?}", line, result),
    }
}

#[test_case(r#"{"t":{"$date":"2022-07-20T12:29:51Z"},"s":"I","c":"CONTROL","id":1,"msg":"m"}"#, "I", "CONTROL", "", 1, "m"; "missing ctx")]
#[test_case(r#"{"t":{"$date":"2022-07-20T12:29:51Z"},"c":"CONTROL","ctx":"main","msg":"m"}"#, "", "CONTROL", "main", 0, "m"; "missing s and id")]
#[test_case(r#"{"t":{"$date":"2022-07-20T12:29:51Z"},"s":"I","id":1,"ctx":"main"}"#, "I", "", "main", 1, ""; "missing c and msg")]
#[test_case(r#"{"t":{"$date":"2022-07-20T12:29:51Z"}}"#, "", "", "", 0, ""; "only t")]
fn test_decode_line_envelope_defaults(line: &str, severity: &str, component: &str, context: &str, id: i64, msg: &str) {
    let rec: LogRecord = record(line);
    assert_eq!(rec.timestamp, ymdhmsm(&FO_0, 2022, 7, 20, 12, 29, 51, 0));
    assert_eq!(rec.severity, severity);
    assert_eq!(rec.component, component);
    assert_eq!(rec.context, context);
    assert_eq!(rec.id, id);
    assert_eq!(rec.msg, msg);
}

#[test]
fn test_decode_line_timestamp_error() {
    let line = log_line("20 July 2022", "CONTROL", "m", None);
    match decode_line(line.as_bytes()) {
        ResultS3DecodeLine::Err(DecodeError::Timestamp { value, .. }) => {
            assert_eq!(value, "20 July 2022");
        }
        result => panic!("expected Err(Timestamp), got {:?}", result),
    }
}

#[test]
fn test_decode_line_invalid_utf8() {
    let mut line: Vec<u8> = LINE_PROCESS_DETAILS.as_bytes().to_vec();
    line[20] = 0xFF;
    assert!(decode_line(line.as_slice()).is_err());
}

#[test]
fn test_log_record_display() {
    let rec: LogRecord = record(LINE_STARTING);
    assert_eq!(
        rec.to_string(),
        "2022-07-20T12:29:51.886-07:00 I CONTROL [initandlisten] 4615611 \"MongoDB starting\""
    );
}
