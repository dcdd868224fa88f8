use serde::{Deserialize, Serialize};

///
/// Filter
///
/// Declarative description of one extraction job: the instance whose
/// observations are wanted and the dimension constraints to apply.
/// Read-only once constructed; nothing in the core mutates it.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Filter {
    /// Identifier of the filter job itself. Carried for traceability only;
    /// never consulted by query composition.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter_id: String,

    /// Instance the query is scoped to. Required, non-empty in well-formed use.
    pub instance_id: String,

    /// Ordered dimension constraints. Order affects generated query text but
    /// not its meaning.
    #[serde(default, rename = "dimensions", skip_serializing_if = "Vec::is_empty")]
    pub dimension_filters: Vec<DimensionFilter>,
}

impl Filter {
    /// Create a filter with no dimension constraints.
    #[must_use]
    pub const fn new(filter_id: String, instance_id: String) -> Self {
        Self {
            filter_id,
            instance_id,
            dimension_filters: Vec::new(),
        }
    }

    /// True when the filter selects the entire instance: no dimension
    /// constraints at all, or only constraints with an empty name or no
    /// options. One well-formed constraint makes the filter non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimension_filters.iter().all(DimensionFilter::is_empty)
    }
}

///
/// DimensionFilter
///
/// A single dimension constraint: the dimension's name and the values an
/// observation may take on it. Name and options are quoted verbatim into
/// query text; callers supply trusted identifiers and values.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DimensionFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl DimensionFilter {
    #[must_use]
    pub fn new(name: impl Into<String>, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            options: options.iter().map(ToString::to_string).collect(),
        }
    }

    /// A constraint contributes nothing unless it has both a name and at
    /// least one option.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.options.is_empty()
    }
}

///
/// TESTS
///
