//! Neo4j adapter for MovieGraph
//!
//! Wraps a `neo4rs::Graph` connection pool. Result rows are converted column
//! by column into `serde_json::Value`s; the column list comes from the bound
//! `CypherQuery`, and a column the server did not send becomes `null`.

use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Query};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{AccessMode, CypherQuery, MovieGraph, Param, Row, WriteSummary};
use crate::{GraphError, Result};

#[derive(Clone)]
pub struct Neo4jMovieGraph {
    graph: Arc<Graph>,
}

impl Neo4jMovieGraph {
    /// Open a connection pool and check the server answers
    ///
    /// `database` of `None` uses the server's default database (needed for
    /// servers that predate multi-database support).
    ///
    /// # Errors
    ///
    /// - `ErrorKind::Config` when the URI or credentials are malformed
    /// - `ErrorKind::Connection` when the server cannot be reached
    pub async fn connect(
        uri: &str,
        user: &str,
        password: &str,
        database: Option<&str>,
    ) -> Result<Self> {
        let mut builder = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password);
        if let Some(db) = database {
            builder = builder.db(db);
        }
        let config = builder
            .build()
            .map_err(|e| GraphError::config(format!("Invalid Neo4j settings: {}", e)).with_source(e))?;

        let graph = Graph::connect(config).await.map_err(|e| {
            GraphError::connection(format!("Failed to connect to Neo4j at {}: {}", uri, e))
                .with_source(e)
        })?;

        let store = Self {
            graph: Arc::new(graph),
        };
        store.verify_connectivity().await?;
        info!(uri, database = database.unwrap_or("<default>"), "connected to Neo4j");
        Ok(store)
    }

    async fn verify_connectivity(&self) -> Result<()> {
        self.graph.run(neo4rs::query("RETURN 1")).await.map_err(|e| {
            GraphError::connection(format!("Neo4j did not answer: {}", e)).with_source(e)
        })
    }

    async fn rows(&self, query: &CypherQuery) -> Result<Vec<Row>> {
        let mut stream = self.graph.execute(to_bolt_query(query)).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.map_err(stream_error)? {
            rows.push(convert_row(&row, query.columns));
        }
        Ok(rows)
    }
}

#[async_trait]
impl MovieGraph for Neo4jMovieGraph {
    async fn fetch(&self, query: &CypherQuery) -> Result<Vec<Row>> {
        query.expect_access(AccessMode::Read)?;
        self.rows(query).await
    }

    async fn write(&self, query: &CypherQuery) -> Result<WriteSummary> {
        query.expect_access(AccessMode::Write)?;
        let rows = self.rows(query).await?;
        let summary = WriteSummary::from_rows(&rows);
        debug!(query = query.name, properties_set = summary.properties_set, "write applied");
        Ok(summary)
    }
}

fn to_bolt_query(query: &CypherQuery) -> Query {
    query
        .params
        .iter()
        .fold(neo4rs::query(query.text), |q, (key, value)| match value {
            Param::String(s) => q.param(key, s.as_str()),
            Param::Integer(i) => q.param(key, *i),
        })
}

/// A failure while pulling records means the reply could not be read
fn stream_error(e: neo4rs::Error) -> GraphError {
    GraphError::decode(format!("Failed to read Neo4j records: {}", e)).with_source(e)
}

fn convert_row(row: &neo4rs::Row, columns: &[&str]) -> Row {
    columns
        .iter()
        .map(|column| {
            let value = row.get::<Value>(column).unwrap_or(Value::Null);
            (column.to_string(), value)
        })
        .collect()
}
