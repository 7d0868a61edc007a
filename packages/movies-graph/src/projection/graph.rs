//! Movie/actor graph for the force-directed view
//!
//! Rows arrive one per movie with the names of its actors. Each row appends a
//! movie node; each actor name either reuses the actor node created by an
//! earlier row or appends a new one, and gets one link to the movie.
//!
//! Movies are never merged with each other, and only actor nodes are candidates
//! for reuse, so an actor who shares a name with a movie still gets a node of
//! their own.

use ahash::AHashMap;
use tracing::debug;

use crate::domain::{GraphLink, GraphNode, GraphResponse, Row};
use crate::queries::{CAST, MOVIE};

/// Build the node/link payload from graph rows
pub fn project_graph(rows: &[Row]) -> GraphResponse {
    let mut acc = GraphAccumulator::with_capacity(rows.len());
    for row in rows {
        let actors = row.get_string_list(CAST);
        acc.add_movie(row.get_string(MOVIE), actors);
    }
    let response = acc.finish();
    debug!(
        rows = rows.len(),
        nodes = response.nodes.len(),
        links = response.links.len(),
        "graph projected"
    );
    response
}

/// Request-local builder for `GraphResponse`
///
/// `actors` maps actor name to node index and replaces a scan over `nodes`;
/// it only ever holds actor nodes.
#[derive(Debug, Default)]
pub struct GraphAccumulator {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
    actors: AHashMap<String, usize>,
}

impl GraphAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(movies: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(movies),
            links: Vec::new(),
            actors: AHashMap::new(),
        }
    }

    /// Append one movie and link its actors; returns the movie's node index
    pub fn add_movie<I, S>(&mut self, title: impl Into<String>, actors: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = self.nodes.len();
        self.nodes.push(GraphNode::movie(title));

        for actor in actors {
            let source = self.actor_index(actor.into());
            self.links.push(GraphLink::new(source, target));
        }
        target
    }

    fn actor_index(&mut self, name: String) -> usize {
        if let Some(&index) = self.actors.get(&name) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(GraphNode::actor(name.clone()));
        self.actors.insert(name, index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn finish(self) -> GraphResponse {
        GraphResponse {
            nodes: self.nodes,
            links: self.links,
        }
    }
}
