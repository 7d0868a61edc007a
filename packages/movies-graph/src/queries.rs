//! Cypher templates
//!
//! Each template is paired with the column names its projection reads. The
//! text is a contract with the database, so keep `RETURN` aliases and the
//! column constants in step.

use crate::domain::{AccessMode, CypherQuery};

/// Row limit for `/graph` when the caller gives none (or an unusable one)
pub const DEFAULT_GRAPH_LIMIT: i64 = 50;

// ═══════════════════════════════════════════════════════════════════════════
// Column names
// ═══════════════════════════════════════════════════════════════════════════

pub const TITLE: &str = "title";
pub const TAGLINE: &str = "tagline";
pub const VOTES: &str = "votes";
pub const RELEASED: &str = "released";
pub const NAME: &str = "name";
pub const JOB: &str = "job";
pub const ROLE: &str = "role";
pub const MOVIE: &str = "movie";
pub const CAST: &str = "cast";

// ═══════════════════════════════════════════════════════════════════════════
// Templates
// ═══════════════════════════════════════════════════════════════════════════

pub const SEARCH_MOVIES: &str = "MATCH (movie:Movie)
 WHERE toLower(movie.title) CONTAINS toLower($title)
 RETURN movie.title AS title, movie.tagline AS tagline, movie.votes AS votes, movie.released AS released";

pub const MOVIE_DETAIL: &str = "MATCH (movie:Movie {title:$title})
 OPTIONAL MATCH (movie)<-[r]-(person:Person)
 WITH movie.title AS title,
      collect({
        name: person.name,
        job: head(split(toLower(type(r)), '_')),
        role: r.roles
      }) AS cast
 LIMIT 1
 UNWIND cast AS c
 RETURN title, c.name AS name, c.job AS job, c.role AS role";

pub const VOTE_FOR_MOVIE: &str = "MATCH (m:Movie {title: $title})
 SET m.votes = coalesce(m.votes, 0) + 1
 RETURN count(m) AS properties_set";

pub const MOVIE_GRAPH: &str = "MATCH (m:Movie)<-[:ACTED_IN]-(a:Person)
 RETURN m.title AS movie, collect(a.name) AS cast
 LIMIT $limit";

// ═══════════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════════

/// Case-insensitive substring match on title
pub fn search_movies(term: &str) -> CypherQuery {
    CypherQuery::new(
        "search_movies",
        SEARCH_MOVIES,
        &[TITLE, TAGLINE, VOTES, RELEASED],
        AccessMode::Read,
    )
    .param("title", term)
}

/// One row per related person, or a single null-person row for a movie with none
pub fn movie_detail(title: &str) -> CypherQuery {
    CypherQuery::new(
        "movie_detail",
        MOVIE_DETAIL,
        &[TITLE, NAME, JOB, ROLE],
        AccessMode::Read,
    )
    .param("title", title)
}

pub fn vote_for_movie(title: &str) -> CypherQuery {
    CypherQuery::new(
        "vote_for_movie",
        VOTE_FOR_MOVIE,
        &[crate::domain::port::PROPERTIES_SET_COLUMN],
        AccessMode::Write,
    )
    .param("title", title)
}

/// One row per movie with the names of everyone who acted in it
pub fn movie_graph(limit: i64) -> CypherQuery {
    CypherQuery::new("movie_graph", MOVIE_GRAPH, &[MOVIE, CAST], AccessMode::Read)
        .param("limit", limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Param;

    #[test]
    fn test_search_binds_term() {
        let q = search_movies("matrix");
        assert_eq!(q.get_param("title"), Some(&Param::String("matrix".into())));
        assert_eq!(q.access, AccessMode::Read);
        assert!(q.text.contains("$title"));
    }

    #[test]
    fn test_vote_is_write() {
        let q = vote_for_movie("Top Gun");
        assert_eq!(q.access, AccessMode::Write);
        assert!(q.text.contains("AS properties_set"));
    }

    #[test]
    fn test_graph_binds_limit() {
        let q = movie_graph(DEFAULT_GRAPH_LIMIT);
        assert_eq!(q.get_param("limit"), Some(&Param::Integer(50)));
        assert_eq!(q.columns, &[MOVIE, CAST]);
    }

    #[test]
    fn test_templates_return_declared_columns() {
        for q in [
            search_movies("x"),
            movie_detail("x"),
            vote_for_movie("x"),
            movie_graph(1),
        ] {
            for column in q.columns {
                assert!(
                    q.text.contains(column),
                    "{} does not return {}",
                    q.name,
                    column
                );
            }
        }
    }
}
