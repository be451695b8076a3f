// src/readers/mod.rs

//! "Readers" for _mloglib_.
//!
//! ## Overview of readers
//!
//! * [`process_file`] drives one pass over one log file.
//! * The pass drives a [`LineReader`] to derive lines.
//! * Each line is decoded to a [`LogRecord`] and fed to a
//!   [`StartupAccumulator`].
//! * A [`PassSummary`] tracks the statistics of the pass.
//!
//! Also see [_Definitions of data_].
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [_Definitions of data_]: crate::data
//! [`Read`]: std::io::Read
//! [`LogRecord`]: crate::data::logrecord::LogRecord
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`StartupAccumulator`]: crate::readers::startupaccumulator::StartupAccumulator
//! [`PassSummary`]: crate::readers::summary::PassSummary
//! [`process_file`]: crate::readers::infoprocessor::process_file

pub mod helpers;
pub mod infoprocessor;
pub mod linereader;
pub mod startupaccumulator;
pub mod summary;
