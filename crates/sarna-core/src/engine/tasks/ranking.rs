use crate::core::models::candidate::Candidate;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Best-first ordering: higher rank first, lower offset first among equal ranks.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.rank.cmp(&a.rank).then_with(|| a.offset.cmp(&b.offset))
}

/// Orders candidates by descending rank.
///
/// The sort is stable and ties fall back to the window offset, so candidates of equal rank keep
/// their generation order whether the scan ran sequentially or in parallel.
#[instrument(skip_all, name = "ranking_task")]
pub fn run(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(compare_candidates);
    if let (Some(best), Some(worst)) = (candidates.first(), candidates.last()) {
        debug!(
            count = candidates.len(),
            best_rank = best.rank,
            worst_rank = worst.rank,
            "Candidates ranked."
        );
    }
    candidates
}
