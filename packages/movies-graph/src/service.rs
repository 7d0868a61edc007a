//! MovieService: bind parameters, run the query, project the rows
//!
//! One method per API operation. The service owns no per-request state; it
//! can be cloned into every handler and called concurrently.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{
    CypherQuery, GraphResponse, MovieDetail, MovieGraph, MovieResult, Row, VoteResult,
    WriteSummary,
};
use crate::projection::{project_graph, project_movie_detail, project_search, project_vote};
use crate::{queries, Result};

#[derive(Clone)]
pub struct MovieService {
    graph: Arc<dyn MovieGraph>,
}

impl MovieService {
    pub fn new(graph: Arc<dyn MovieGraph>) -> Self {
        Self { graph }
    }

    /// Movies whose title contains `term`, ignoring case
    pub async fn search(&self, term: &str) -> Result<Vec<MovieResult>> {
        let rows = self.fetch(queries::search_movies(term)).await?;
        Ok(project_search(&rows))
    }

    /// A movie and its cast; unknown titles give an empty detail
    pub async fn movie(&self, title: &str) -> Result<MovieDetail> {
        let rows = self.fetch(queries::movie_detail(title)).await?;
        Ok(project_movie_detail(&rows))
    }

    /// Add one vote to a movie
    pub async fn vote(&self, title: &str) -> Result<VoteResult> {
        let summary = self.write(queries::vote_for_movie(title)).await?;
        Ok(project_vote(&summary))
    }

    /// Movie/actor graph over at most `limit` movies
    pub async fn graph(&self, limit: i64) -> Result<GraphResponse> {
        let rows = self.fetch(queries::movie_graph(limit)).await?;
        Ok(project_graph(&rows))
    }

    async fn fetch(&self, query: CypherQuery) -> Result<Vec<Row>> {
        debug!(query = query.name, "running read query");
        match self.graph.fetch(&query).await {
            Ok(rows) => {
                debug!(query = query.name, rows = rows.len(), "read query finished");
                Ok(rows)
            }
            Err(err) => {
                error!(query = query.name, error = %err, "error querying graph");
                Err(err)
            }
        }
    }

    async fn write(&self, query: CypherQuery) -> Result<WriteSummary> {
        debug!(query = query.name, "running write query");
        self.graph.write(&query).await.map_err(|err| {
            error!(query = query.name, error = %err, "error writing to graph");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GraphNode, Param};
    use crate::infrastructure::memory::ScriptedMovieGraph;
    use crate::ErrorKind;
    use serde_json::json;

    fn service(graph: ScriptedMovieGraph) -> (MovieService, Arc<ScriptedMovieGraph>) {
        let graph = Arc::new(graph);
        (MovieService::new(graph.clone()), graph)
    }

    #[tokio::test]
    async fn test_search_binds_term_and_projects() {
        let (svc, graph) = service(ScriptedMovieGraph::new().with_rows(
            "search_movies",
            vec![Row::from(json!({"title": "The Matrix", "released": 1999}))],
        ));

        let results = svc.search("matrix").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].movie.title, "The Matrix");

        let calls = graph.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].get_param("title"),
            Some(&Param::String("matrix".into()))
        );
    }

    #[tokio::test]
    async fn test_movie_detail() {
        let (svc, _) = service(ScriptedMovieGraph::new().with_rows(
            "movie_detail",
            vec![Row::from(json!({
                "title": "Top Gun", "name": "Tom Cruise", "job": "acted", "role": ["Maverick"]
            }))],
        ));

        let movie = svc.movie("Top Gun").await.unwrap();
        assert_eq!(movie.title, "Top Gun");
        assert_eq!(movie.cast[0].role, Some(vec!["Maverick".to_string()]));
    }

    #[tokio::test]
    async fn test_vote_unknown_movie_is_zero() {
        let (svc, graph) = service(ScriptedMovieGraph::new());

        let vote = svc.vote("No Such Movie").await.unwrap();
        assert_eq!(vote, VoteResult { updates: 0 });
        assert_eq!(graph.calls().await[0].name, "vote_for_movie");
    }

    #[tokio::test]
    async fn test_vote_reports_summary() {
        let (svc, _) = service(
            ScriptedMovieGraph::new().with_summary("vote_for_movie", WriteSummary::new(1)),
        );
        assert_eq!(svc.vote("Top Gun").await.unwrap().updates, 1);
    }

    #[tokio::test]
    async fn test_graph_passes_limit() {
        let (svc, graph) = service(ScriptedMovieGraph::new().with_rows(
            "movie_graph",
            vec![Row::from(json!({"movie": "Top Gun", "cast": ["Tom Cruise"]}))],
        ));

        let response = svc.graph(7).await.unwrap();
        assert_eq!(response.nodes[0], GraphNode::movie("Top Gun"));
        assert_eq!(
            graph.calls().await[0].get_param("limit"),
            Some(&Param::Integer(7))
        );
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let (svc, _) = service(ScriptedMovieGraph::new().failing("search_movies", "syntax error"));

        let err = svc.search("x").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Query);
        assert!(err.message.contains("syntax error"));
    }
}
