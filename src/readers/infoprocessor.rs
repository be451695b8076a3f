// src/readers/infoprocessor.rs

//! Implements the "info" pass over one log file: [`process_file`] and
//! [`process_reader`].
//!
//! The pass streams lines through a [`LineReader`], decodes each with
//! [`decode_line`], feeds each record to a [`StartupAccumulator`], and
//! writes a report whenever the accumulated [`StartupInfo`] is complete.
//! At the end of the stream a [`PassSummary`] is written.
//!
//! Any line that is not a record (other than a lines-skipped banner) or an
//! interesting record with unexpected attributes ends the pass with an
//! [`InfoError`].
//!
//! [`StartupInfo`]: crate::data::startupinfo::StartupInfo

use crate::common::{FPath, FileOpenOptions, LineNumber};
use crate::data::attributes::FieldError;
use crate::data::logrecord::{decode_line, DecodeError, LogRecord, ResultS3DecodeLine};
use crate::printer::report::{
    write_lines_skipped_warning,
    write_replica_config_notice,
    write_startup_report,
};
use crate::printer::summary::write_pass_summary;
use crate::readers::helpers::fpath_to_path;
use crate::readers::linereader::{LineReader, ResultS3ReadLine};
use crate::readers::startupaccumulator::{AccumulateResult, AccumulatorConfig, StartupAccumulator};
use crate::readers::summary::PassSummary;

use std::io::{self, BufRead, BufReader, Write};

use ::bstr::ByteSlice;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// A log file pass failed.
///
/// The underlying failure is the [`source`]; print the whole chain to see
/// it, e.g. with `anyhow`'s `{:#}`.
///
/// [`source`]: std::error::Error::source
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("cannot open log file {path:?}")]
    FileOpen {
        path: FPath,
        #[source]
        source: io::Error,
    },

    #[error("error reading line {line_number} of log file {path:?}")]
    StreamRead {
        path: FPath,
        line_number: LineNumber,
        #[source]
        source: io::Error,
    },

    #[error("line {line_number} of log file {path:?} is not a log record: {line}")]
    LineDecode {
        path: FPath,
        line_number: LineNumber,
        /// the offending line, lossy UTF-8
        line: String,
        #[source]
        source: DecodeError,
    },

    #[error("line {line_number} of log file {path:?} has unexpected attributes: {line}")]
    Field {
        path: FPath,
        line_number: LineNumber,
        /// the offending line, lossy UTF-8
        line: String,
        #[source]
        source: FieldError,
    },

    #[error("error writing output")]
    Output(#[from] io::Error),
}

impl InfoError {
    /// The one-based line number of the failure, if the failure is about a
    /// line.
    pub fn line_number(&self) -> Option<LineNumber> {
        match self {
            InfoError::StreamRead { line_number, .. }
            | InfoError::LineDecode { line_number, .. }
            | InfoError::Field { line_number, .. } => Some(*line_number),
            InfoError::FileOpen { .. } | InfoError::Output(_) => None,
        }
    }
}

/// Run the pass over the log file at `path`, writing reports and the
/// summary to `out`.
pub fn process_file<W: Write>(
    path: &FPath,
    out: &mut W,
    config: &AccumulatorConfig,
) -> Result<PassSummary, InfoError> {
    defn!("({:?})", path);
    let mut open_options = FileOpenOptions::new();
    let file = match open_options.read(true).open(fpath_to_path(path)) {
        Ok(val) => val,
        Err(source) => {
            defx!("open failed {}", source);
            return Err(InfoError::FileOpen { path: path.clone(), source });
        }
    };
    let result = process_reader(path, BufReader::new(file), out, config);
    defx!("return is_ok {}", result.is_ok());

    result
}

/// Run the pass over the lines of `reader`, writing reports and the summary
/// to `out`. `path` names the stream in output and errors.
///
/// Lines are read one at a time; the stream is never held in memory.
pub fn process_reader<R: BufRead, W: Write>(
    path: &FPath,
    reader: R,
    out: &mut W,
    config: &AccumulatorConfig,
) -> Result<PassSummary, InfoError> {
    defn!("({:?}, {:?})", path, config);
    let mut linereader = LineReader::new(reader);
    let mut accumulator = StartupAccumulator::new(config.clone());
    let mut summary = PassSummary::new(path.clone());

    loop {
        let line_number: LineNumber = linereader.count_lines_processed() + 1;
        let line: &[u8] = match linereader.next_line() {
            ResultS3ReadLine::Found(line) => line,
            ResultS3ReadLine::Done => break,
            ResultS3ReadLine::Err(source) => {
                defx!("read error at line {}: {}", line_number, source);
                return Err(InfoError::StreamRead {
                    path: path.clone(),
                    line_number,
                    source,
                });
            }
        };
        summary.lines += 1;

        let record: LogRecord = match decode_line(line) {
            ResultS3DecodeLine::Found(record) => record,
            ResultS3DecodeLine::Done => {
                defo!("banner at line {}", line_number);
                summary.banners += 1;
                write_lines_skipped_warning(out, line)?;
                continue;
            }
            ResultS3DecodeLine::Err(source) => {
                defx!("decode error at line {}: {}", line_number, source);
                return Err(InfoError::LineDecode {
                    path: path.clone(),
                    line_number,
                    line: line.to_str_lossy().into_owned(),
                    source,
                });
            }
        };
        summary.records += 1;
        if record.is_truncated() {
            summary.truncated += 1;
        }
        summary.update_datetime(&record.timestamp);

        match accumulator.accumulate(&record) {
            Ok(AccumulateResult::ReplicaConfig(notice)) => {
                write_replica_config_notice(out, &notice)?;
                summary.notices += 1;
            }
            Ok(_result) => {
                defo!("line {}: {:?}", line_number, _result);
            }
            Err(source) => {
                defx!("field error at line {}: {}", line_number, source);
                return Err(InfoError::Field {
                    path: path.clone(),
                    line_number,
                    line: line.to_str_lossy().into_owned(),
                    source,
                });
            }
        }
        if let Some(report) = accumulator.take_report() {
            write_startup_report(out, &report)?;
            summary.reports += 1;
        }
    }
    write_pass_summary(out, &summary)?;
    out.flush()?;
    defx!("{:?}", summary);

    Ok(summary)
}
