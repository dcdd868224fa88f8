use obsfilter_core::{
    graph::{GraphError, GraphErrorKind},
    source::{SourceError, Terminal},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Connection could not be acquired or dropped mid-query.
    Connection,
    /// The statement was rejected by the store.
    Statement,
    /// The store did not answer in time.
    Timeout,
    /// Cursor-level failure while advancing or closing.
    Cursor,
    /// A result record did not have the expected CSV-line shape.
    MalformedRow,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Graph,
    Source,
}

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        let kind = match err.kind {
            GraphErrorKind::Connection => ErrorKind::Connection,
            GraphErrorKind::Statement => ErrorKind::Statement,
            GraphErrorKind::Timeout => ErrorKind::Timeout,
            GraphErrorKind::Cursor => ErrorKind::Cursor,
        };

        Self::new(kind, ErrorOrigin::Graph, err.message)
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NoDataInRow | SourceError::UnrecognisedRowType => {
                Self::new(ErrorKind::MalformedRow, ErrorOrigin::Source, err.to_string())
            }
            SourceError::Graph(graph) => graph.into(),
        }
    }
}

impl TryFrom<Terminal> for Error {
    type Error = ();

    /// End-of-data is not an error; only a failed terminal converts.
    fn try_from(terminal: Terminal) -> Result<Self, ()> {
        match terminal {
            Terminal::EndOfData => Err(()),
            Terminal::Failed(err) => Ok(err.into()),
        }
    }
}

///
/// TESTS
///
