//! Cursor-to-row adaptation.
//!
//! Translates driver-shaped records into the one-CSV-line-at-a-time contract
//! the streaming reader consumes, and folds end-of-data and failure into a
//! single terminal condition.

use crate::graph::{GraphError, GraphRows};
use thiserror::Error as ThisError;

///
/// SourceError
///
/// Fatal conditions raised while adapting one cursor record to a row.
///

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum SourceError {
    #[error("no data returned in this row")]
    NoDataInRow,

    #[error("the value returned was not a string")]
    UnrecognisedRowType,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

///
/// Terminal
///
/// "This read path is finished", uniformly: either the source ran out of
/// rows or it failed. End-of-data is not an error, but it travels the same
/// channel so a row and its termination can be delivered together.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Terminal {
    EndOfData,
    Failed(SourceError),
}

///
/// RowFetch
///
/// Result of one row-source read. Text and terminal are not mutually
/// exclusive: the final row arrives together with `EndOfData` when the
/// cursor reports exhaustion in the same call.
///

#[derive(Clone, Debug, PartialEq)]
pub struct RowFetch {
    pub text: String,
    pub terminal: Option<Terminal>,
}

impl RowFetch {
    /// A row with more to come.
    #[must_use]
    pub const fn row(text: String) -> Self {
        Self {
            text,
            terminal: None,
        }
    }

    /// The final row, delivered together with end-of-data.
    #[must_use]
    pub const fn last_row(text: String) -> Self {
        Self {
            text,
            terminal: Some(Terminal::EndOfData),
        }
    }

    /// End of data with no row attached.
    #[must_use]
    pub const fn end_of_data() -> Self {
        Self {
            text: String::new(),
            terminal: Some(Terminal::EndOfData),
        }
    }

    /// A failure with no row attached.
    #[must_use]
    pub const fn failed(err: SourceError) -> Self {
        Self {
            text: String::new(),
            terminal: Some(Terminal::Failed(err)),
        }
    }
}

///
/// RowSource
///
/// Minimal "read one CSV line as text, or finish" capability consumed by the
/// streaming reader. Row text is always newline-terminated by the source.
///

pub trait RowSource {
    fn read_row(&mut self) -> RowFetch;

    fn close(&mut self) -> Result<(), GraphError>;
}

///
/// GraphRowSource
///
/// Adapts a graph cursor to `RowSource`: one record per call, first field
/// taken as the CSV line, driver shapes and failures mapped onto the row
/// contract.
///

pub struct GraphRowSource<R: GraphRows> {
    rows: R,
}

impl<R: GraphRows> GraphRowSource<R> {
    #[must_use]
    pub const fn new(rows: R) -> Self {
        Self { rows }
    }
}

impl<R: GraphRows> RowSource for GraphRowSource<R> {
    fn read_row(&mut self) -> RowFetch {
        let fetch = match self.rows.fetch() {
            Ok(fetch) => fetch,
            Err(err) => return RowFetch::failed(SourceError::Graph(err)),
        };

        let Some(record) = fetch.record else {
            return RowFetch::end_of_data();
        };

        let Some(first) = record.first() else {
            return RowFetch::failed(SourceError::NoDataInRow);
        };

        let Some(text) = first.as_text() else {
            return RowFetch::failed(SourceError::UnrecognisedRowType);
        };

        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');

        if fetch.exhausted {
            RowFetch::last_row(line)
        } else {
            RowFetch::row(line)
        }
    }

    fn close(&mut self) -> Result<(), GraphError> {
        self.rows.close()
    }
}

///
/// TESTS
///
