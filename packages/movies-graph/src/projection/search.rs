use crate::domain::{MovieResult, MovieSummary, Row};
use crate::queries::{RELEASED, TAGLINE, TITLE, VOTES};

/// One `MovieResult` per row, in row order
pub fn project_search(rows: &[Row]) -> Vec<MovieResult> {
    rows.iter().map(summary_from_row).map(MovieResult::from).collect()
}

fn summary_from_row(row: &Row) -> MovieSummary {
    MovieSummary {
        title: row.get_string(TITLE),
        tagline: row.get_opt_string(TAGLINE),
        votes: row.get_opt_i64(VOTES),
        released: row.get_i64(RELEASED),
    }
}
