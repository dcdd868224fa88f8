//! Graph collaborator boundary.
//!
//! The core never talks to a driver directly. Everything above this module
//! is written against `GraphConnection` and `GraphRows`, so query building,
//! row adaptation, and streaming are all testable against stand-ins.

use thiserror::Error as ThisError;

///
/// Value
///
/// One field of a heterogeneous cursor record. CSV extraction only ever
/// consumes the text shape; the rest exist so a record can be inspected and
/// rejected with a precise error.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Value {
    /// Borrow the text payload, if this field is text-shaped.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

///
/// GraphErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphErrorKind {
    /// Connection could not be acquired or dropped mid-query.
    Connection,
    /// The statement was rejected by the store.
    Statement,
    /// The store did not answer in time.
    Timeout,
    /// Cursor-level failure while advancing or closing.
    Cursor,
}

///
/// GraphError
///
/// Driver failure surface. Cloneable so a failure fetched alongside the last
/// row can be held as a sticky terminal by the reader.
///

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
#[error("{message}")]
pub struct GraphError {
    pub kind: GraphErrorKind,
    pub message: String,
}

impl GraphError {
    #[must_use]
    pub fn new(kind: GraphErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

///
/// RecordFetch
///
/// One step of a cursor. A record and exhaustion are not mutually exclusive:
/// a cursor may hand over its final record and report exhaustion in the same
/// call. `record: None` with `exhausted: true` is the bare end signal.
///

#[derive(Clone, Debug, PartialEq)]
pub struct RecordFetch {
    pub record: Option<Vec<Value>>,
    pub exhausted: bool,
}

impl RecordFetch {
    /// A record with more to come.
    #[must_use]
    pub const fn record(fields: Vec<Value>) -> Self {
        Self {
            record: Some(fields),
            exhausted: false,
        }
    }

    /// The final record.
    #[must_use]
    pub const fn last_record(fields: Vec<Value>) -> Self {
        Self {
            record: Some(fields),
            exhausted: true,
        }
    }

    /// End of data with no record attached.
    #[must_use]
    pub const fn exhausted() -> Self {
        Self {
            record: None,
            exhausted: true,
        }
    }
}

///
/// GraphRows
///
/// Cursor over an in-progress query result, consumed one record at a time.
/// `close` releases the cursor and any owning connection resource; callers
/// invoke it exactly once.
///

pub trait GraphRows {
    fn fetch(&mut self) -> Result<RecordFetch, GraphError>;

    fn close(&mut self) -> Result<(), GraphError>;
}

///
/// GraphConnection
///
/// A single capability: run a textual graph query, optionally with named
/// parameters, and hand back a cursor. Pooling and transport concerns live
/// behind this trait. The store always passes empty params; values are
/// inlined into the statement text.
///

pub trait GraphConnection {
    type Rows: GraphRows;

    fn query(&self, statement: &str, params: &[(&str, Value)]) -> Result<Self::Rows, GraphError>;
}

///
/// TESTS
///
