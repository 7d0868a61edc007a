use crate::domain::{MovieDetail, Person, Row};
use crate::queries::{JOB, NAME, ROLE, TITLE};

/// Fold the per-person rows of one movie into a `MovieDetail`
///
/// Every row becomes a cast entry, including the sentinel row the query emits
/// for a movie with no related people. That keeps "no cast" (one empty entry)
/// apart from "no such movie" (no entries).
pub fn project_movie_detail(rows: &[Row]) -> MovieDetail {
    let mut movie = MovieDetail::default();
    for row in rows {
        movie.title = row.get_string(TITLE);
        movie.cast.push(person_from_row(row));
    }
    movie
}

fn person_from_row(row: &Row) -> Person {
    Person {
        name: row.get_string(NAME),
        job: row.get_string(JOB),
        // Non-list roles are dropped, not reported
        role: row.get_opt_string_list(ROLE),
    }
}
