//! obsfilter — filtered observation extraction from a graph store, streamed
//! as CSV bytes.
//!
//! ## Crate layout
//! - `core`: filter model, query builder, collaborator traits, row source
//!   adapter, streaming reader, and the store orchestrator.
//! - `error`: the public error type with a stable kind + origin taxonomy.
//!
//! The `prelude` module mirrors the surface a consuming service uses: build
//! a [`Filter`], hand it to a [`Store`] over your graph connection, and pull
//! bytes from the returned [`CsvReader`] through `std::io::Read`.

pub use obsfilter_core as core;

mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

pub use core::{
    filter::{DimensionFilter, Filter},
    graph::{GraphConnection, GraphError, GraphErrorKind, GraphRows, RecordFetch, Value},
    obs::{Event, EventSink, NoopSink},
    query::{Statement, build_csv_query},
    reader::CsvReader,
    source::{GraphRowSource, RowFetch, RowSource, SourceError, Terminal},
    store::Store,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        CsvReader, DimensionFilter, Error, Filter, GraphConnection, GraphRows, Store, Value,
    };
}
