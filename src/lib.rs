// src/lib.rs

//! _mlog_ reads MongoDB structured (JSON lines) log files and reports the
//! startup and log rotation information of the server that wrote them,
//! along with a summary of each file.
//!
//! A log file is read line by line by a [`LineReader`]. Each line is decoded
//! into a [`LogRecord`] by [`decode_line`]. Records are fed to a
//! [`StartupAccumulator`] which gathers a [`StartupInfo`] from the startup
//! messages. A completed `StartupInfo` is printed as a report by
//! [`write_startup_report`]. The whole pass is driven by
//! [`process_file`], which also tracks a [`PassSummary`] printed by
//! [`write_pass_summary`].
//!
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`LogRecord`]: crate::data::logrecord::LogRecord
//! [`decode_line`]: crate::data::logrecord::decode_line
//! [`StartupAccumulator`]: crate::readers::startupaccumulator::StartupAccumulator
//! [`StartupInfo`]: crate::data::startupinfo::StartupInfo
//! [`write_startup_report`]: crate::printer::report::write_startup_report
//! [`process_file`]: crate::readers::infoprocessor::process_file
//! [`PassSummary`]: crate::readers::summary::PassSummary
//! [`write_pass_summary`]: crate::printer::summary::write_pass_summary

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
