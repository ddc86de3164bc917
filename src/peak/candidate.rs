//! Candidate ordering and non-maximum suppression.

use std::cmp::Ordering;

use crate::geom::RowCol;

/// Local maximum of a score surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Grid location of the candidate.
    pub at: RowCol,
    /// Score at `at`.
    pub score: f64,
}

fn candidate_cmp_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.at.row.cmp(&b.at.row))
        .then_with(|| a.at.col.cmp(&b.at.col))
}

/// Sorts candidates by descending score with deterministic tie-breaking.
pub(crate) fn sort_candidates_desc(candidates: &mut [Candidate]) {
    candidates.sort_by(candidate_cmp_desc);
}

/// Greedy suppression of weaker candidates.
///
/// After ordering, a candidate survives when its Chebyshev distance to every
/// survivor so far exceeds `radius`. A zero radius keeps everything.
pub(crate) fn nms_2d(candidates: &mut [Candidate], radius: usize) -> Vec<Candidate> {
    sort_candidates_desc(candidates);
    candidates.iter().fold(Vec::new(), |mut survivors, cand| {
        let clear = radius == 0
            || survivors
                .iter()
                .all(|kept: &Candidate| kept.at.chebyshev(cand.at) > radius);
        if clear {
            survivors.push(*cand);
        }
        survivors
    })
}
