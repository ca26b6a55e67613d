//! Forward-only line source
//!
//! One `SourceLines` per input file: a sequential, single-pass reader that
//! yields trimmed lines and counts them. There is no peeking and no seeking;
//! restarting means constructing a new instance. The underlying handle is
//! released by `Drop` on every exit path, including early abandonment.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Sequential reader yielding trimmed text lines from one input unit.
pub struct SourceLines<R: BufRead> {
    reader: R,
    line_number: usize,
}

impl SourceLines<BufReader<File>> {
    /// Open a line source over a file on disk.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Read the next line, trimmed of leading and trailing whitespace.
    ///
    /// Returns `None` once the input is exhausted. The cursor only moves
    /// forward; a line can never be read twice.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(buf.trim().to_string()))
    }

    /// 1-based number of the most recently returned line.
    ///
    /// Used for diagnostics only; stays at its final value after the input
    /// is exhausted.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
