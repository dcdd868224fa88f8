//! Store orchestration.
//!
//! Binds the query builder to a graph connection and wraps the resulting
//! cursor into the streaming reader. Holds one connection's worth of work at
//! a time; each call issues exactly one query.

use crate::{
    filter::Filter,
    graph::{GraphConnection, GraphError},
    obs::{Event, EventSink, NoopSink},
    query::build_csv_query,
    reader::CsvReader,
    source::GraphRowSource,
};

static NOOP_SINK: NoopSink = NoopSink;

///
/// Store
///
/// Observation storage reached through an abstract graph connection.
///

pub struct Store<C: GraphConnection> {
    connection: C,
    events: &'static dyn EventSink,
}

impl<C: GraphConnection> Store<C> {
    /// Create a store over the given connection, with no event observer.
    #[must_use]
    pub const fn new(connection: C) -> Self {
        Self {
            connection,
            events: &NOOP_SINK,
        }
    }

    /// Install an event sink for subsequent calls on this store.
    #[must_use]
    pub const fn with_events(mut self, events: &'static dyn EventSink) -> Self {
        self.events = events;
        self
    }

    /// Build and execute the CSV extraction query for `filter`, returning a
    /// reader over the result rows. Rows returned can be capped via `limit`;
    /// `None` means no cap.
    ///
    /// On execution failure the connection's error is propagated unchanged
    /// and nothing is left half-built.
    pub fn csv_rows(
        &self,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<CsvReader<GraphRowSource<C::Rows>>, GraphError> {
        if filter.is_empty() {
            self.events.record(Event::FullInstanceQuery {
                filter_id: &filter.filter_id,
                instance_id: &filter.instance_id,
            });
        }

        let statement = build_csv_query(filter, limit);

        self.events.record(Event::QueryBuilt {
            filter_id: &filter.filter_id,
            instance_id: &filter.instance_id,
            statement: statement.as_str(),
        });

        let rows = self.connection.query(statement.as_str(), &[])?;

        Ok(CsvReader::new(GraphRowSource::new(rows)))
    }
}

///
/// TESTS
///
