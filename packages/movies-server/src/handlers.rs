//! HTTP request handlers

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use movies_graph::domain::{GraphResponse, MovieDetail, MovieResult, VoteResult};
use movies_graph::queries::DEFAULT_GRAPH_LIMIT;
use movies_graph::MovieService;
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: MovieService,
    pub public_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(service: MovieService, public_dir: PathBuf) -> Self {
        Self {
            service,
            public_dir: Arc::new(public_dir),
        }
    }
}

/// Query string as decoded pairs, in request order
///
/// Kept as raw pairs so repeated keys and bad values never reject the request.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.public_dir.join("index.html");
    debug!("Serving HTML file {}", page.display());
    match tokio::fs::read_to_string(&page).await {
        Ok(body) => Ok(Html(body)),
        Err(source) => Err(ApiError::Asset { path: page, source }),
    }
}

/// `GET /search?q=`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Vec<MovieResult>>, ApiError> {
    // missing means empty, which matches every movie
    let term = first_param(&params, "q").unwrap_or_default();
    let movies = state.service.search(term).await?;
    info!(term = %term, hits = movies.len(), "search");
    Ok(Json(movies))
}

/// `GET /movie/:title`
pub async fn movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieDetail>, ApiError> {
    let movie = state.service.movie(&title).await?;
    info!(title = %title, cast = movie.cast.len(), "movie detail");
    Ok(Json(movie))
}

/// `GET /movie/vote/:title`
pub async fn vote(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<VoteResult>, ApiError> {
    let vote = state.service.vote(&title).await?;
    info!(title = %title, updates = vote.updates, "vote");
    Ok(Json(vote))
}

/// `GET /graph?limit=`
pub async fn graph(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<GraphResponse>, ApiError> {
    let limit = parse_limit(first_param(&params, "limit"));
    let graph = state.service.graph(limit).await?;
    info!(
        limit,
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "graph"
    );
    Ok(Json(graph))
}

/// Row limit from the raw `limit` parameter
///
/// Anything that is not a non-negative integer, surrounding whitespace
/// included, falls back to `DEFAULT_GRAPH_LIMIT`.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_GRAPH_LIMIT;
    };
    match raw.parse::<i64>() {
        Ok(limit) if limit >= 0 => limit,
        _ => {
            warn!(limit = raw, "unusable graph limit, using default");
            DEFAULT_GRAPH_LIMIT
        }
    }
}
