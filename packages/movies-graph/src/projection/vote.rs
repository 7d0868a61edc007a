use crate::domain::{VoteResult, WriteSummary};

/// Zero updates means no movie had that title; that is a result, not an error.
pub fn project_vote(summary: &WriteSummary) -> VoteResult {
    VoteResult {
        updates: summary.properties_set,
    }
}
