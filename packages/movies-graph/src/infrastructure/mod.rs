//! Infrastructure layer - MovieGraph adapters
//!
//! - `neo4j`: Bolt driver adapter (default feature)
//! - `memory`: scripted in-process double for tests

#[cfg(feature = "neo4j")]
pub mod neo4j;

#[cfg(any(test, feature = "testing"))]
pub mod memory;

#[cfg(feature = "neo4j")]
pub use neo4j::Neo4jMovieGraph;

#[cfg(any(test, feature = "testing"))]
pub use memory::ScriptedMovieGraph;
