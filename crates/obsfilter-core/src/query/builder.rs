//! Filter-to-statement composition.
//!
//! Pure string building, no I/O and no driver types. The generated text is
//! part of the wire contract with the graph schema: downstream fixtures
//! assert on it byte-for-byte, so composition is deterministic and the exact
//! spacing and casing of each clause is load-bearing.

use crate::filter::Filter;
use derive_more::{Deref, Display};
use std::fmt::Write;

///
/// Statement
///
/// A composed graph query. Plain text; derefs to its string form.
///

#[derive(Clone, Debug, Deref, Display, Eq, PartialEq)]
pub struct Statement(String);

impl Statement {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compose the single query selecting the header row and the matching
/// observation rows for `filter`, optionally capped to `limit` rows.
///
/// The result is always `header UNION ALL observations`, so the header row
/// leads the result order. Dimension names and option values are inlined
/// verbatim, unescaped: callers supply trusted identifiers and values, and a
/// name or option that breaks the query syntax yields a broken statement.
#[must_use]
pub fn build_csv_query(filter: &Filter, limit: Option<usize>) -> Statement {
    let mut statement = format!(
        "MATCH (i:`_{}_Instance`) RETURN i.header as row",
        filter.instance_id
    );

    statement.push_str(" UNION ALL ");
    statement.push_str(&observation_part(filter));

    if let Some(limit) = limit {
        let _ = write!(statement, " LIMIT {limit}");
    }

    Statement(statement)
}

/// The observation selection: a bare instance scan when the filter is empty,
/// otherwise patterns, constraints, carry-forward, and relationship clauses
/// in that fixed order, one entry per well-formed dimension filter.
fn observation_part(filter: &Filter) -> String {
    let instance = &filter.instance_id;

    if filter.is_empty() {
        // no dimension filters supplied, match the entire dataset
        return format!("MATCH(o: `_{instance}_observation`) return o.value as row");
    }

    let mut patterns = String::from("MATCH ");
    let mut constraints = String::from(" WHERE ");
    let mut carry = String::from(" WITH ");
    let mut relationships = String::from(" MATCH ");

    let mut first = true;
    for dimension in filter.dimension_filters.iter().filter(|d| !d.is_empty()) {
        if !first {
            patterns.push_str(", ");
            constraints.push_str(" AND ");
            carry.push_str(", ");
            relationships.push_str(", ");
        }
        first = false;

        let name = &dimension.name;
        let _ = write!(patterns, "({name}:`_{instance}_{name}`)");
        let _ = write!(
            constraints,
            "{name}.value IN [{}]",
            option_list(&dimension.options)
        );
        carry.push_str(name);
        let _ = write!(
            relationships,
            "(o:`_{instance}_observation`)-[:isValueOf]->({name})"
        );
    }

    patterns + &constraints + &carry + &relationships + " RETURN o.value AS row"
}

fn option_list(options: &[String]) -> String {
    let mut list = String::new();
    for (index, option) in options.iter().enumerate() {
        if index != 0 {
            list.push_str(", ");
        }
        let _ = write!(list, "'{option}'");
    }
    list
}
