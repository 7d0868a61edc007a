//! Projections: query rows -> response models
//!
//! All projections are pure functions over a borrowed row slice. Nothing here
//! talks to the database or keeps state between calls.

pub mod detail;
pub mod graph;
pub mod search;
pub mod vote;

pub use detail::project_movie_detail;
pub use graph::{project_graph, GraphAccumulator};
pub use search::project_search;
pub use vote::project_vote;
