//! Event sink boundary.
//!
//! The core never logs on its own. Anything worth seeing from the outside
//! flows through `Event` and `EventSink`; the surrounding application plugs
//! in a sink that forwards to its logger.

///
/// Event
///
/// Store-level happenings an external observer may care about. Borrowed
/// views only; sinks copy what they keep.
///

#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    /// A statement was composed and is about to be executed.
    QueryBuilt {
        filter_id: &'a str,
        instance_id: &'a str,
        statement: &'a str,
    },

    /// The filter carried no usable dimension constraints, so the statement
    /// selects the entire instance.
    FullInstanceQuery {
        filter_id: &'a str,
        instance_id: &'a str,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: Event<'_>);
}

///
/// NoopSink
///
/// Default sink when no observer is installed.
///

pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: Event<'_>) {}
}
