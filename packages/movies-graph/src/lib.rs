//! movies-graph - movie catalog over a graph database
//!
//! Turns graph query rows into the three response shapes the movies API
//! serves: search hits, a movie with its cast, and a movie/actor node-link
//! graph for force-directed rendering. Votes are a single write whose
//! property counter is reported back.
//!
//! ## Layers
//!
//! - `domain`: response models, untyped `Row`s, the `MovieGraph` port
//! - `queries`: Cypher templates and parameter binding
//! - `projection`: pure rows -> model functions
//! - `service`: query + projection per API operation
//! - `infrastructure`: `Neo4jMovieGraph` (feature `neo4j`), `ScriptedMovieGraph`
//!   (feature `testing`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movies_graph::{MovieService, Neo4jMovieGraph};
//!
//! let graph = Neo4jMovieGraph::connect("neo4j://localhost", "neo4j", "secret", Some("movies")).await?;
//! let service = MovieService::new(Arc::new(graph));
//!
//! let hits = service.search("matrix").await?;
//! let graph = service.graph(50).await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod projection;
pub mod queries;
pub mod service;

pub use error::{ErrorKind, GraphError, Result};
pub use service::MovieService;

#[cfg(feature = "neo4j")]
pub use infrastructure::Neo4jMovieGraph;

#[cfg(any(test, feature = "testing"))]
pub use infrastructure::ScriptedMovieGraph;
