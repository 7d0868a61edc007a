//! Response models
//!
//! Every model here is built fresh per request from the rows of one query and
//! serialized straight away. Field order matches the JSON the front end reads.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Search
// ═══════════════════════════════════════════════════════════════════════════

/// One movie matching a search term
///
/// # Examples
///
/// ```rust
/// use movies_graph::domain::MovieSummary;
///
/// let movie = MovieSummary::new("The Matrix", 1999);
/// assert_eq!(movie.tagline, None);
/// assert_eq!(movie.votes, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Crowd-sourced vote tally; absent until the first vote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    /// Release year
    pub released: i64,
}

impl MovieSummary {
    pub fn new(title: impl Into<String>, released: i64) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            votes: None,
            released,
        }
    }
}

/// Search hit envelope: `{"movie": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResult {
    pub movie: MovieSummary,
}

impl From<MovieSummary> for MovieResult {
    fn from(movie: MovieSummary) -> Self {
        Self { movie }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Detail
// ═══════════════════════════════════════════════════════════════════════════

/// A person related to a movie
///
/// `job` is the lower-cased first word of the relationship type
/// (`ACTED_IN` -> `acted`, `DIRECTED` -> `directed`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub job: String,
    /// Roles played; `None` when the relationship carried no usable role list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Vec<String>>,
}

/// A single movie and everyone related to it
///
/// Cast order is row arrival order. An empty `cast` means the query produced
/// no rows at all; a movie without related people still yields one entry with
/// an empty name and job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    #[serde(default)]
    pub cast: Vec<Person>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Vote
// ═══════════════════════════════════════════════════════════════════════════

/// Number of properties a vote wrote (not the resulting tally)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    pub updates: u64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Graph
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLabel {
    Movie,
    Actor,
}

impl NodeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Movie => "movie",
            NodeLabel::Actor => "actor",
        }
    }
}

/// Graph node; identity is the `(title, label)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphNode {
    pub title: String,
    pub label: NodeLabel,
}

impl GraphNode {
    pub fn movie(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            label: NodeLabel::Movie,
        }
    }

    pub fn actor(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            label: NodeLabel::Actor,
        }
    }
}

/// Directed link between two positions of `GraphResponse::nodes`
///
/// `source` is always an actor, `target` always a movie. Indices are only
/// meaningful within the response that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

impl GraphLink {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// Node/link payload for the force-directed view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphResponse {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphResponse {
    pub fn count(&self, label: NodeLabel) -> usize {
        self.nodes.iter().filter(|n| n.label == label).count()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_movie_result_json_shape() {
        let result = MovieResult::from(MovieSummary {
            title: "The Matrix".to_string(),
            tagline: Some("Welcome to the Real World".to_string()),
            votes: Some(5),
            released: 1999,
        });

        let json = serde_json::to_string(&vec![result]).unwrap();
        assert_eq!(
            json,
            r#"[{"movie":{"title":"The Matrix","tagline":"Welcome to the Real World","votes":5,"released":1999}}]"#
        );
    }

    #[test]
    fn test_movie_summary_omits_missing_optionals() {
        let value = serde_json::to_value(MovieSummary::new("Unforgiven", 1992)).unwrap();
        assert_eq!(value, json!({"title": "Unforgiven", "released": 1992}));
    }

    #[test]
    fn test_person_without_role() {
        let value = serde_json::to_value(Person::default()).unwrap();
        assert_eq!(value, json!({"name": "", "job": ""}));
    }

    #[test]
    fn test_movie_detail_always_has_cast() {
        let value = serde_json::to_value(MovieDetail::default()).unwrap();
        assert_eq!(value, json!({"title": "", "cast": []}));
    }

    #[test]
    fn test_node_label_serde() {
        let node = GraphNode::actor("Keanu Reeves");
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"title": "Keanu Reeves", "label": "actor"})
        );

        let parsed: GraphNode =
            serde_json::from_value(json!({"title": "Speed", "label": "movie"})).unwrap();
        assert_eq!(parsed, GraphNode::movie("Speed"));
        assert_eq!(NodeLabel::Movie.as_str(), "movie");
    }

    #[test]
    fn test_same_title_different_label_are_distinct() {
        assert_ne!(GraphNode::movie("Hoffa"), GraphNode::actor("Hoffa"));
    }

    #[test]
    fn test_vote_result_json() {
        let json = serde_json::to_string(&VoteResult { updates: 0 }).unwrap();
        assert_eq!(json, r#"{"updates":0}"#);
    }
}
