// src/printer/mod.rs

//! The `printer` module is for printing user-facing text: startup
//! [`StartupReport`s], the replica set configuration notice, and the
//! [`PassSummary`] of each log file.
//!
//! Report and summary functions write to any [`Write`] so the same output
//! can go to stdout or to a buffer under test.
//!
//! [`StartupReport`s]: crate::data::startupinfo::StartupReport
//! [`PassSummary`]: crate::readers::summary::PassSummary
//! [`Write`]: std::io::Write

pub mod printers;
pub mod report;
pub mod summary;
