//! Scripted MovieGraph for tests
//!
//! Answers each query by its `CypherQuery::name` with canned rows, a canned
//! write summary, or a failure. Unscripted reads return no rows and unscripted
//! writes report zero properties set. Every call is recorded.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{AccessMode, CypherQuery, MovieGraph, Row, WriteSummary};
use crate::{GraphError, Result};

#[derive(Debug, Clone)]
enum Scripted {
    Rows(Vec<Row>),
    Summary(WriteSummary),
    Fail(String),
}

#[derive(Debug, Default)]
pub struct ScriptedMovieGraph {
    responses: HashMap<String, Scripted>,
    calls: Mutex<Vec<CypherQuery>>,
}

impl ScriptedMovieGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, query: &str, rows: Vec<Row>) -> Self {
        self.responses.insert(query.to_string(), Scripted::Rows(rows));
        self
    }

    pub fn with_summary(mut self, query: &str, summary: WriteSummary) -> Self {
        self.responses
            .insert(query.to_string(), Scripted::Summary(summary));
        self
    }

    /// Make `query` fail with a `Query` error carrying `message`
    pub fn failing(mut self, query: &str, message: &str) -> Self {
        self.responses
            .insert(query.to_string(), Scripted::Fail(message.to_string()));
        self
    }

    /// Queries received so far, oldest first
    pub async fn calls(&self) -> Vec<CypherQuery> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, query: &CypherQuery) -> Option<Scripted> {
        self.calls.lock().await.push(query.clone());
        self.responses.get(query.name).cloned()
    }
}

#[async_trait]
impl MovieGraph for ScriptedMovieGraph {
    async fn fetch(&self, query: &CypherQuery) -> Result<Vec<Row>> {
        query.expect_access(AccessMode::Read)?;
        match self.record(query).await {
            Some(Scripted::Rows(rows)) => Ok(rows),
            Some(Scripted::Fail(message)) => Err(GraphError::query(message)),
            Some(Scripted::Summary(_)) | None => Ok(Vec::new()),
        }
    }

    async fn write(&self, query: &CypherQuery) -> Result<WriteSummary> {
        query.expect_access(AccessMode::Write)?;
        match self.record(query).await {
            Some(Scripted::Summary(summary)) => Ok(summary),
            Some(Scripted::Rows(rows)) => Ok(WriteSummary::from_rows(&rows)),
            Some(Scripted::Fail(message)) => Err(GraphError::query(message)),
            None => Ok(WriteSummary::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries;
    use serde_json::json;

    #[tokio::test]
    async fn test_unscripted_defaults() {
        let graph = ScriptedMovieGraph::new();

        assert!(graph.fetch(&queries::search_movies("x")).await.unwrap().is_empty());
        let summary = graph.write(&queries::vote_for_movie("x")).await.unwrap();
        assert_eq!(summary.properties_set, 0);
        assert_eq!(graph.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_write_from_rows() {
        let graph = ScriptedMovieGraph::new().with_rows(
            "vote_for_movie",
            vec![Row::from(json!({"properties_set": 1}))],
        );
        let summary = graph.write(&queries::vote_for_movie("x")).await.unwrap();
        assert_eq!(summary.properties_set, 1);
    }

    #[tokio::test]
    async fn test_failure() {
        let graph = ScriptedMovieGraph::new().failing("movie_graph", "Neo.ClientError");
        let err = graph.fetch(&queries::movie_graph(5)).await.unwrap_err();
        assert!(err.to_string().contains("Neo.ClientError"));
    }

    #[tokio::test]
    async fn test_access_mode_mismatch_is_rejected() {
        let graph = ScriptedMovieGraph::new();

        let err = graph.fetch(&queries::vote_for_movie("x")).await.unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Query);
        let err = graph.write(&queries::movie_graph(5)).await.unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Query);
        assert!(graph.calls().await.is_empty());
    }
}
