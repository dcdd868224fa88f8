//! Core runtime for obsfilter: the filter model, the graph query builder,
//! the cursor-to-row adapter, the streaming CSV reader, and the store that
//! binds them together over an abstract graph connection.
#![warn(unreachable_pub)]

pub mod filter;
pub mod graph;
pub mod obs;
pub mod query;
pub mod reader;
pub mod source;
pub mod store;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No adapters, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        filter::{DimensionFilter, Filter},
        graph::{GraphConnection, GraphRows, Value},
        reader::CsvReader,
        store::Store,
    };
}
