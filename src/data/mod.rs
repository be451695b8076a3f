// src/data/mod.rs

//! The `data` module is specialized data containers for
//! [`LogRecord`]s, [`StartupInfo`], and the functions that derive them.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is sequence of bytes that:
//!
//! * begin after a prior "line" or the beginning of a file.
//! * end with a newline character `'\n'` or the end of a file.
//!
//! A "line" is found by a [`LineReader`].
//!
//! ### Record
//!
//! A "record" is a "line" that is one JSON object with the structured log
//! envelope: timestamp `t.$date`, severity `s`, component `c`, context
//! `ctx`, message id `id`, message text `msg`, and optionally attributes
//! `attr`, `tags`, and truncation information `truncated`/`size`.
//!
//! A "record" is represented by a [`LogRecord`] and decoded by
//! [`decode_line`].
//!
//! ### Banner line
//!
//! A "banner line" is a "line" beginning with [`LINES_SKIPPED_BANNER`]. It
//! marks that the server omitted some lines. It is skipped; it is not an
//! error.
//!
//! ### Startup info
//!
//! The "startup info" is gathered from several non-contiguous "records"
//! (_MongoDB starting_, _Build Info_, _Operating System_, replica set
//! membership, and finally _Options set by command line_). It is
//! represented by a [`StartupInfo`] and gathered by a
//! [`StartupAccumulator`].
//!
//! ### Rendered document
//!
//! A "rendered document" is a nested key/value structure from an attribute
//! bag rendered as YAML by [`render_document`].
//!
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`LogRecord`]: crate::data::logrecord::LogRecord
//! [`decode_line`]: crate::data::logrecord::decode_line
//! [`LINES_SKIPPED_BANNER`]: crate::data::logrecord::LINES_SKIPPED_BANNER
//! [`StartupInfo`]: crate::data::startupinfo::StartupInfo
//! [`StartupAccumulator`]: crate::readers::startupaccumulator::StartupAccumulator
//! [`render_document`]: crate::data::document::render_document

pub mod attributes;
pub mod datetime;
pub mod document;
pub mod logrecord;
pub mod startupinfo;
