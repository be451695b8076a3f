// src/readers/summary.rs

//! Implements [`PassSummary`], the statistics of one log file pass.

use crate::common::{Count, FPath};
use crate::data::datetime::{DateTimeL, DateTimeLOpt, Duration, FixedOffset};

use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Statistics of one log file pass, printed at the end of the pass by
/// [`write_pass_summary`].
///
/// [`write_pass_summary`]: crate::printer::summary::write_pass_summary
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PassSummary {
    pub path: FPath,
    /// `Count` of lines read, including banner lines.
    pub lines: Count,
    /// `Count` of lines decoded as records.
    pub records: Count,
    /// `Count` of lines-skipped banner lines.
    pub banners: Count,
    /// `Count` of records with a truncation marker.
    pub truncated: Count,
    /// `Count` of startup and rotation reports written.
    pub reports: Count,
    /// `Count` of replica set configuration notices written.
    pub notices: Count,
    /// Earliest record timestamp.
    pub earliest: DateTimeLOpt,
    /// Latest record timestamp.
    pub latest: DateTimeLOpt,
}

impl PassSummary {
    pub fn new(path: FPath) -> PassSummary {
        PassSummary {
            path,
            ..Default::default()
        }
    }

    /// Widen the earliest/latest bounds to include `datetime`.
    ///
    /// Comparison is of absolute instants; the offset of a bound is the
    /// offset of the record that set it.
    pub fn update_datetime(&mut self, datetime: &DateTimeL) {
        match self.earliest {
            Some(earliest) if earliest <= *datetime => {}
            _ => {
                defñ!("earliest {}", datetime);
                self.earliest = Some(*datetime);
            }
        }
        match self.latest {
            Some(latest) if latest >= *datetime => {}
            _ => {
                defñ!("latest {}", datetime);
                self.latest = Some(*datetime);
            }
        }
        debug_assert_le!(self.earliest, self.latest, "earliest is after latest");
    }

    /// Were any timestamped records seen?
    pub fn has_range(&self) -> bool {
        self.earliest.is_some() && self.latest.is_some()
    }

    /// `latest - earliest`, if any records were seen.
    pub fn duration(&self) -> Option<Duration> {
        match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => Some(latest.signed_duration_since(earliest)),
            _ => None,
        }
    }

    /// The UTC offset of the log file, taken from the earliest record.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.earliest.map(|dt| *dt.offset())
    }
}
