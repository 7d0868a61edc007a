//! Port trait: the graph query engine
//!
//! The engine is opaque: it accepts a Cypher template with named parameters and
//! returns ordered rows, or for writes a summary of what changed. Adapters live
//! in `crate::infrastructure`.

use async_trait::async_trait;

use super::row::Row;
use crate::{GraphError, Result};

/// Whether a template reads or mutates the graph
///
/// `MovieGraph::fetch` only accepts `Read` queries and `MovieGraph::write`
/// only `Write` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

/// Named query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    String(String),
    Integer(i64),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::String(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::String(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Integer(value)
    }
}

/// A bound query ready to send to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherQuery {
    /// Short stable name used for logging and test doubles
    pub name: &'static str,
    pub text: &'static str,
    pub params: Vec<(&'static str, Param)>,
    /// Columns the template returns, in order
    pub columns: &'static [&'static str],
    pub access: AccessMode,
}

impl CypherQuery {
    pub fn new(
        name: &'static str,
        text: &'static str,
        columns: &'static [&'static str],
        access: AccessMode,
    ) -> Self {
        Self {
            name,
            text,
            params: Vec::new(),
            columns,
            access,
        }
    }

    pub fn param(mut self, key: &'static str, value: impl Into<Param>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn get_param(&self, key: &str) -> Option<&Param> {
        self.params.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Reject a query sent through the wrong port method
    pub fn expect_access(&self, mode: AccessMode) -> Result<()> {
        if self.access == mode {
            return Ok(());
        }
        Err(GraphError::query(format!(
            "{} is a {:?} query, sent as {:?}",
            self.name, self.access, mode
        )))
    }
}

/// Column a write template uses to report how many properties it set
pub const PROPERTIES_SET_COLUMN: &str = "properties_set";

/// Counters from a completed write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub properties_set: u64,
}

impl WriteSummary {
    pub fn new(properties_set: u64) -> Self {
        Self { properties_set }
    }

    /// Read the counter out of the rows a write template returned
    ///
    /// Missing or negative counts read as zero.
    pub fn from_rows(rows: &[Row]) -> Self {
        let properties_set = rows
            .iter()
            .map(|row| row.get_i64(PROPERTIES_SET_COLUMN).max(0) as u64)
            .sum();
        Self { properties_set }
    }
}

/// Graph query engine abstraction
///
/// # Implementations
///
/// - `Neo4jMovieGraph`: Bolt connection pool via `neo4rs`
/// - `ScriptedMovieGraph`: canned rows for tests
#[async_trait]
pub trait MovieGraph: Send + Sync {
    /// Run a read query and collect every row in arrival order
    ///
    /// # Errors
    ///
    /// Returns `GraphError` when the engine rejects or fails the query.
    async fn fetch(&self, query: &CypherQuery) -> Result<Vec<Row>>;

    /// Run a write query and report its counters
    async fn write(&self, query: &CypherQuery) -> Result<WriteSummary>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params() {
        let q = CypherQuery::new("demo", "RETURN $a, $b", &["a", "b"], AccessMode::Read)
            .param("a", "x")
            .param("b", 3i64);

        assert_eq!(q.get_param("a"), Some(&Param::String("x".into())));
        assert_eq!(q.get_param("b"), Some(&Param::Integer(3)));
        assert_eq!(q.get_param("c"), None);
    }

    #[test]
    fn test_expect_access() {
        let read = CypherQuery::new("reader", "RETURN 1", &[], AccessMode::Read);
        assert!(read.expect_access(AccessMode::Read).is_ok());

        let err = read.expect_access(AccessMode::Write).unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Query);
        assert!(err.message.contains("reader"));
    }

    #[test]
    fn test_write_summary_from_rows() {
        let rows = vec![Row::from(json!({"properties_set": 1}))];
        assert_eq!(WriteSummary::from_rows(&rows), WriteSummary::new(1));
    }

    #[test]
    fn test_write_summary_defaults_to_zero() {
        assert_eq!(WriteSummary::from_rows(&[]).properties_set, 0);
        let odd = vec![Row::from(json!({"properties_set": -3})), Row::new()];
        assert_eq!(WriteSummary::from_rows(&odd).properties_set, 0);
    }
}
