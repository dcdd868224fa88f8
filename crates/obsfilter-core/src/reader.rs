//! Streaming CSV reader.
//!
//! Turns the pull-based, one-row-at-a-time `RowSource` into a bounded-buffer
//! byte reader. Callers see a plain `std::io::Read`, so the stream can be
//! copied to a file or an HTTP response body unmodified.

use crate::{
    graph::GraphError,
    source::{RowSource, Terminal},
};
use std::{fmt, io};

///
/// CsvReader
///
/// Per-instance state only: the unread suffix of the most recent row, a
/// terminal condition held until that suffix drains, and delivery counters.
/// One reader exclusively owns one row source; never shared.
///

pub struct CsvReader<S: RowSource> {
    source: S,
    pending: Vec<u8>,
    terminal: Option<Terminal>,
    total_bytes_read: u64,
    rows_read: u64,
}

impl<S: RowSource> CsvReader<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            pending: Vec::new(),
            terminal: None,
            total_bytes_read: 0,
            rows_read: 0,
        }
    }

    /// Fill `dst` from the stream and report any terminal condition.
    ///
    /// At most one new row is fetched from the source per call: buffers
    /// larger than a row get a short read, never a spanning read. A terminal
    /// fetched alongside a row is surfaced in the very same call that drains
    /// the row's last byte, and on every call after that.
    pub fn read_chunk(&mut self, dst: &mut [u8]) -> (usize, Option<Terminal>) {
        if self.pending.is_empty() && self.terminal.is_none() {
            let fetch = self.source.read_row();
            if !fetch.text.is_empty() {
                self.rows_read += 1;
            }
            self.pending = fetch.text.into_bytes();
            self.terminal = fetch.terminal;
        }

        if self.pending.is_empty() {
            return (0, self.terminal.clone());
        }

        let n = dst.len().min(self.pending.len());
        dst[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        self.total_bytes_read += n as u64;

        if self.pending.is_empty() {
            (n, self.terminal.clone())
        } else {
            (n, None)
        }
    }

    /// Bytes delivered to callers so far. Monotonic.
    #[must_use]
    pub const fn total_bytes_read(&self) -> u64 {
        self.total_bytes_read
    }

    /// Rows whose text has been delivered (fully or partially) so far.
    /// Monotonic; independent of the buffer sizes used to drain them.
    #[must_use]
    pub const fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Release the underlying row source (and transitively its cursor and
    /// connection). Consumes the reader, so release happens exactly once.
    pub fn close(mut self) -> Result<(), GraphError> {
        self.source.close()
    }
}

// Manual impl: sources are not required to be Debug, and the interesting
// state is the reader's own accounting anyway.
impl<S: RowSource> fmt::Debug for CsvReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvReader")
            .field("pending_bytes", &self.pending.len())
            .field("terminal", &self.terminal)
            .field("total_bytes_read", &self.total_bytes_read)
            .field("rows_read", &self.rows_read)
            .finish_non_exhaustive()
    }
}

impl<S: RowSource> io::Read for CsvReader<S> {
    /// `io::Read` view of the stream. A terminal fetched alongside row bytes
    /// stays buffered until the following call, per io conventions:
    /// end-of-data becomes the usual `Ok(0)`, a failure becomes `Err` and is
    /// sticky.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let (n, terminal) = self.read_chunk(buf);
        if n > 0 {
            return Ok(n);
        }

        match terminal {
            None | Some(Terminal::EndOfData) => Ok(0),
            Some(Terminal::Failed(err)) => Err(io::Error::other(err)),
        }
    }
}

///
/// TESTS
///
