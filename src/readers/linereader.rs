// src/readers/linereader.rs

//! Implements a [`LineReader`], the driver of deriving lines from a
//! buffered byte stream.
//!
//! Lines are separated by `'\n'`. A trailing `'\r'` is also removed. The
//! final line of a stream need not end with a newline.

use crate::common::{Bytes, Count, CRu8, NLu8, ResultS3};

use std::fmt;
use std::io::{BufRead, Error};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Initial capacity of the line buffer. Structured log lines with large
/// attribute bags are often a few kilobytes.
pub const LINE_BUFFER_CAPACITY: usize = 0x1000;

/// [`LineReader::next_line`] result.
///
/// - `Found` is the next line, without line ending.
/// - `Done` is end of stream.
/// - `Err` is a read failure.
pub type ResultS3ReadLine<'a> = ResultS3<&'a [u8], Error>;

/// Reads lines from a [`BufRead`], reusing one buffer for every line.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`Read`]: std::io::Read
pub struct LineReader<R: BufRead> {
    reader: R,
    /// The current line, including line ending.
    buffer: Bytes,
    /// `Count` of lines returned.
    pub(crate) lines_processed: Count,
    /// `Count` of bytes read, including line endings.
    pub(crate) bytes_processed: Count,
}

impl<R: BufRead> fmt::Debug for LineReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("lines_processed", &self.lines_processed)
            .field("bytes_processed", &self.bytes_processed)
            .field("buffer capacity", &self.buffer.capacity())
            .finish()
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> LineReader<R> {
        LineReader {
            reader,
            buffer: Bytes::with_capacity(LINE_BUFFER_CAPACITY),
            lines_processed: 0,
            bytes_processed: 0,
        }
    }

    /// `Count` of lines returned so far.
    pub const fn count_lines_processed(&self) -> Count {
        self.lines_processed
    }

    /// `Count` of bytes read so far.
    pub const fn count_bytes_processed(&self) -> Count {
        self.bytes_processed
    }

    /// Read the next line.
    ///
    /// The returned slice is valid until the next call.
    pub fn next_line(&mut self) -> ResultS3ReadLine<'_> {
        self.buffer.clear();
        let read: usize = match self.reader.read_until(NLu8, &mut self.buffer) {
            Ok(val) => val,
            Err(err) => {
                defñ!("read_until error {}", err);
                return ResultS3ReadLine::Err(err);
            }
        };
        if read == 0 {
            defñ!("Done; lines {}", self.lines_processed);
            return ResultS3ReadLine::Done;
        }
        self.lines_processed += 1;
        self.bytes_processed += read as Count;

        let mut end: usize = self.buffer.len();
        if end > 0 && self.buffer[end - 1] == NLu8 {
            end -= 1;
        }
        if end > 0 && self.buffer[end - 1] == CRu8 {
            end -= 1;
        }

        ResultS3ReadLine::Found(&self.buffer[..end])
    }
}
