//! Domain layer for the movie catalog
//!
//! # Domain Models
//!
//! - `MovieSummary` / `MovieResult`: one search hit
//! - `MovieDetail` / `Person`: a movie with its cast
//! - `VoteResult`: number of properties a vote mutated
//! - `GraphResponse` / `GraphNode` / `GraphLink`: force-directed graph payload
//!
//! # Rows
//!
//! - `Row`: one untyped result record plus default-and-continue accessors
//!
//! # Port Trait
//!
//! - `MovieGraph`: the graph query engine as seen by the projections
//!
//! # Examples
//!
//! ```rust,ignore
//! use movies_graph::domain::{MovieGraph, Row};
//! use movies_graph::queries;
//!
//! async fn example(graph: impl MovieGraph) -> movies_graph::Result<()> {
//!     let rows: Vec<Row> = graph.fetch(&queries::search_movies("matrix")).await?;
//!     for row in &rows {
//!         println!("{} ({})", row.get_string("title"), row.get_i64("released"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod port;
pub mod row;

pub use models::{
    GraphLink, GraphNode, GraphResponse, MovieDetail, MovieResult, MovieSummary, NodeLabel,
    Person, VoteResult,
};
pub use port::{AccessMode, CypherQuery, MovieGraph, Param, WriteSummary};
pub use row::Row;
