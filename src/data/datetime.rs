// src/data/datetime.rs

//! Functions to transform MongoDB structured log timestamp strings to chrono
//! [`DateTime`] instances, and to render `DateTime`s, UTC offsets and
//! durations for the reports.
//!
//! A structured log timestamp is the string value at `t.$date`, e.g.
//! `"2022-07-20T12:29:51.886-07:00"`. The originating UTC offset is
//! preserved in the returned [`DateTimeL`] so the log file's time zone
//! can be reported later.
//!
//! The most relevant document to understand this file is the `chrono` crate
//! [`strftime`] format.
//!
//! [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html

#![allow(non_camel_case_types)]

#[doc(hidden)]
pub use ::chrono::{
    DateTime,
    Duration,
    FixedOffset,
    NaiveDateTime,
    Offset,
    ParseError,
    TimeZone,
    Utc,
};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// chrono [`DateTime::parse_from_str`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
/// [`DateTime::parse_from_str`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html#method.parse_from_str
pub type DateTimePattern_str = str;

/// A chrono [`DateTime`] type used in _mloglib_.
///
/// The `FixedOffset` is the UTC offset written in the log file.
///
/// [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
pub type DateTimeL = DateTime<FixedOffset>;
pub type DateTimeLOpt = Option<DateTimeL>;

/// A timestamp pattern and whether that pattern carries its own timezone.
///
/// Patterns without a timezone are interpreted at [`DATETIME_PARSE_TZ_DEFAULT_SECS`].
#[derive(Debug, Eq, PartialEq)]
pub struct DateTimeParseInstr<'a> {
    pub pattern: &'a DateTimePattern_str,
    pub has_tz: bool,
}

/// Offset used for timestamp patterns without a numeric UTC offset.
/// The only such pattern ends in a literal `Z`, so this is UTC.
pub const DATETIME_PARSE_TZ_DEFAULT_SECS: i32 = 0;

pub const DATETIME_PARSE_DATAS_LEN: usize = 2;

/// Timestamp patterns tried in order by [`datetime_parse_record_timestamp`].
///
/// `%.f` accepts an optional fraction of any precision.
pub const DATETIME_PARSE_DATAS: [DateTimeParseInstr; DATETIME_PARSE_DATAS_LEN] = [
    // mongod `--timeStampFormat iso8601-local` (the default)
    // 2022-07-20T12:29:51.886-07:00
    DateTimeParseInstr {
        pattern: "%Y-%m-%dT%H:%M:%S%.f%:z",
        has_tz: true,
    },
    // mongod `--timeStampFormat iso8601-utc`
    // 2022-07-20T19:29:51.886Z
    DateTimeParseInstr {
        pattern: "%Y-%m-%dT%H:%M:%S%.fZ",
        has_tz: false,
    },
];

/// Convert a [`&str`] to a chrono [`DateTime<FixedOffset>`] instance.
///
/// Compensate for a missing timezone.
///
/// - `data` to parse that has a datetime string
/// - strftime `pattern` to use for parsing
/// - `has_tz`, the `pattern` has a timezone (`%z`, `%:z`, etc.)?
/// - `tz_offset` fallback timezone offset when `!has_tz`
///
/// [`&str`]: str
/// [`DateTime<FixedOffset>`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
pub fn datetime_parse_from_str(
    data: &str,
    pattern: &DateTimePattern_str,
    has_tz: bool,
    tz_offset: &FixedOffset,
) -> Result<DateTimeL, ParseError> {
    defn!("(pattern {:?}, has_tz {}, tz_offset {:?}, data {:?})", pattern, has_tz, tz_offset, data);

    if has_tz {
        let dt = DateTime::parse_from_str(data, pattern)?;
        defx!("return {:?}", dt);

        return Ok(dt);
    }
    // no timezone in `pattern` so first convert to a `NaiveDateTime` instance
    let dt_naive = NaiveDateTime::parse_from_str(data, pattern)?;
    defo!("NaiveDateTime {:?}", dt_naive);
    // second shift the local `NaiveDateTime` to UTC and attach `tz_offset`
    let dt_naive_utc = dt_naive - Duration::seconds(tz_offset.local_minus_utc() as i64);
    let dt: DateTimeL = tz_offset.from_utc_datetime(&dt_naive_utc);
    defx!("return {:?}", dt);

    Ok(dt)
}

/// Parse the `t.$date` string of a structured log record.
///
/// Each of [`DATETIME_PARSE_DATAS`] is tried in order. If none match then
/// the error of the first pattern is returned; it is the most likely
/// intended format.
pub fn datetime_parse_record_timestamp(data: &str) -> Result<DateTimeL, ParseError> {
    let tz_default = FixedOffset::east_opt(DATETIME_PARSE_TZ_DEFAULT_SECS).unwrap_or(Utc.fix());
    let dtpi0 = &DATETIME_PARSE_DATAS[0];
    let err0 = match datetime_parse_from_str(data, dtpi0.pattern, dtpi0.has_tz, &tz_default) {
        Ok(dt) => return Ok(dt),
        Err(err) => err,
    };
    for dtpi in DATETIME_PARSE_DATAS[1..].iter() {
        if let Ok(dt) = datetime_parse_from_str(data, dtpi.pattern, dtpi.has_tz, &tz_default) {
            return Ok(dt);
        }
    }

    Err(err0)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Fixed-width datetime format used for all printed UTC timestamps,
/// e.g. `Wed Jul 20 19:29:51 2022`.
///
/// This is the "ANSI C" `asctime` layout.
pub const DATETIMEFMT_ANSIC: &str = "%a %b %e %H:%M:%S %Y";

/// Render the passed `DateTimeL` in UTC using [`DATETIMEFMT_ANSIC`].
pub fn datetime_to_utc_string(dt: &DateTimeL) -> String {
    dt.with_timezone(&Utc)
        .format(DATETIMEFMT_ANSIC)
        .to_string()
}

/// Split a UTC offset into whole hours and remaining minutes.
///
/// Both values are truncated toward zero so both carry the sign of the
/// offset, e.g. `-03:30` is `(-3, -30)` and `+05:30` is `(5, 30)`.
pub fn utc_offset_hours_minutes(offset: &FixedOffset) -> (i32, i32) {
    let secs: i32 = offset.local_minus_utc();
    let hours: i32 = secs / 3600;
    let minutes: i32 = (secs / 60) % 60;
    defñ!("({:?}) secs {} return ({}, {})", offset, secs, hours, minutes);

    (hours, minutes)
}

/// Render a `Duration` the way a Go `time.Duration` prints, e.g.
/// `2h3m4.5s`, `3m0.25s`, `12s`, `614ms`, `1.5µs`, `40ns`.
///
/// Larger units are omitted when zero. A span under one second uses the
/// largest sub-second unit with a non-zero whole part. Negative durations
/// are rendered with a leading `-`.
pub fn duration_to_string(duration: &Duration) -> String {
    let sign: &str = if *duration < Duration::zero() { "-" } else { "" };
    let abs: Duration = duration.abs();
    let secs: i64 = abs.num_seconds();
    let nanos: i64 = abs.subsec_nanos() as i64;

    if secs == 0 {
        return match nanos {
            0 => String::from("0s"),
            1..=999 => format!("{}{}ns", sign, nanos),
            1_000..=999_999 => format!("{}{}µs", sign, decimal(nanos, 1_000)),
            _ => format!("{}{}ms", sign, decimal(nanos, 1_000_000)),
        };
    }
    let hours: i64 = secs / 3600;
    let minutes: i64 = (secs / 60) % 60;
    let seconds_s: String = decimal((secs % 60) * 1_000_000_000 + nanos, 1_000_000_000);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds_s)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds_s)
    } else {
        format!("{}{}s", sign, seconds_s)
    }
}

/// `value / unit` as a decimal without trailing zeros, e.g.
/// `decimal(1_500, 1_000)` is `"1.5"`. `unit` is a power of ten.
fn decimal(value: i64, unit: i64) -> String {
    let whole: i64 = value / unit;
    let rem: i64 = value % unit;
    if rem == 0 {
        return whole.to_string();
    }
    let width: usize = unit.to_string().len() - 1;
    let frac: String = format!("{:0width$}", rem, width = width);

    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
