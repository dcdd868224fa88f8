//! Scripted stand-ins for the graph collaborators and the row source, used
//! across the unit tests. Close calls are counted through shared cells so
//! release-exactly-once properties can be asserted.

use crate::{
    graph::{GraphConnection, GraphError, GraphRows, RecordFetch, Value},
    source::{RowFetch, RowSource},
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

///
/// ScriptedRows
///
/// Cursor that replays a fixed sequence of fetch outcomes, then reports
/// exhaustion forever.
///

pub(crate) struct ScriptedRows {
    fetches: VecDeque<Result<RecordFetch, GraphError>>,
    close_calls: Rc<Cell<u32>>,
}

impl ScriptedRows {
    pub(crate) fn new(fetches: Vec<Result<RecordFetch, GraphError>>) -> Self {
        Self {
            fetches: fetches.into(),
            close_calls: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn close_calls(&self) -> Rc<Cell<u32>> {
        self.close_calls.clone()
    }
}

impl GraphRows for ScriptedRows {
    fn fetch(&mut self) -> Result<RecordFetch, GraphError> {
        self.fetches
            .pop_front()
            .unwrap_or_else(|| Ok(RecordFetch::exhausted()))
    }

    fn close(&mut self) -> Result<(), GraphError> {
        self.close_calls.set(self.close_calls.get() + 1);
        Ok(())
    }
}

///
/// FnSource
///
/// Row source driven by a closure, mirroring the scripted mocks the store
/// tests use for cursors.
///

pub(crate) struct FnSource<F: FnMut() -> RowFetch> {
    read: F,
    close_calls: Rc<Cell<u32>>,
}

impl<F: FnMut() -> RowFetch> FnSource<F> {
    pub(crate) fn new(read: F) -> Self {
        Self {
            read,
            close_calls: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn close_calls(&self) -> Rc<Cell<u32>> {
        self.close_calls.clone()
    }
}

impl<F: FnMut() -> RowFetch> RowSource for FnSource<F> {
    fn read_row(&mut self) -> RowFetch {
        (self.read)()
    }

    fn close(&mut self) -> Result<(), GraphError> {
        self.close_calls.set(self.close_calls.get() + 1);
        Ok(())
    }
}

///
/// MockConnection
///
/// Records every statement and parameter list it is asked to run, then hands
/// out a scripted cursor (or a scripted failure).
///

pub(crate) struct MockConnection {
    statements: RefCell<Vec<String>>,
    params: RefCell<Vec<Vec<(String, Value)>>>,
    fetches: RefCell<VecDeque<Result<RecordFetch, GraphError>>>,
    fail: Option<GraphError>,
    close_calls: Rc<Cell<u32>>,
}

impl MockConnection {
    pub(crate) fn with_fetches(fetches: Vec<Result<RecordFetch, GraphError>>) -> Self {
        Self {
            statements: RefCell::new(Vec::new()),
            params: RefCell::new(Vec::new()),
            fetches: RefCell::new(fetches.into()),
            fail: None,
            close_calls: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn failing(err: GraphError) -> Self {
        let mut connection = Self::with_fetches(Vec::new());
        connection.fail = Some(err);
        connection
    }

    pub(crate) fn statements(&self) -> Vec<String> {
        self.statements.borrow().clone()
    }

    pub(crate) fn params_seen(&self) -> Vec<Vec<(String, Value)>> {
        self.params.borrow().clone()
    }

    pub(crate) fn close_calls(&self) -> Rc<Cell<u32>> {
        self.close_calls.clone()
    }
}

impl GraphConnection for MockConnection {
    type Rows = ScriptedRows;

    fn query(&self, statement: &str, params: &[(&str, Value)]) -> Result<Self::Rows, GraphError> {
        self.statements.borrow_mut().push(statement.to_string());
        self.params.borrow_mut().push(
            params
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
        );

        if let Some(err) = &self.fail {
            return Err(err.clone());
        }

        Ok(ScriptedRows {
            fetches: self.fetches.borrow_mut().drain(..).collect(),
            close_calls: self.close_calls.clone(),
        })
    }
}
