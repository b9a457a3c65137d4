//! Ranking of scored candidates
//!
//! Sorts candidates by closeness score, breaking exact ties by ascending
//! candidate id so the ordering is deterministic regardless of catalog
//! order.

use ordered_float::OrderedFloat;
use rankx_core::Candidate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A candidate together with its closeness score and 1-based rank
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Relative closeness to the ideal solution, in [0, 1]
    pub topsis_score: f64,
    /// 1 = best
    pub rank: u32,
}

/// Pair candidates with their scores and assign ranks.
///
/// `scores` is positional: `scores[i]` belongs to `candidates[i]`.
pub(crate) fn rank_candidates(candidates: &[Candidate], scores: &[f64]) -> Vec<ScoredCandidate> {
    debug_assert_eq!(candidates.len(), scores.len());

    let mut ranked: Vec<ScoredCandidate> = candidates
        .iter()
        .zip(scores)
        .map(|(candidate, &score)| ScoredCandidate {
            candidate: candidate.clone(),
            topsis_score: score,
            rank: 0,
        })
        .collect();

    ranked.sort_by_key(|sc| (Reverse(OrderedFloat(sc.topsis_score)), sc.candidate.id));

    for (index, sc) in ranked.iter_mut().enumerate() {
        sc.rank = index as u32 + 1;
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankx_core::NUM_CRITERIA;

    fn candidate(id: u32, name: &str) -> Candidate {
        Candidate::new(id, name, 0.0, [1.0; NUM_CRITERIA])
    }

    #[test]
    fn test_descending_by_score() {
        let candidates = vec![candidate(1, "A"), candidate(2, "B"), candidate(3, "C")];
        let ranked = rank_candidates(&candidates, &[0.3, 0.9, 0.6]);

        assert_eq!(ranked[0].candidate.id, 2);
        assert_eq!(ranked[1].candidate.id, 3);
        assert_eq!(ranked[2].candidate.id, 1);
        assert_eq!(
            ranked.iter().map(|sc| sc.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_exact_ties_break_by_ascending_id() {
        let candidates = vec![candidate(7, "A"), candidate(2, "B"), candidate(5, "C")];
        let ranked = rank_candidates(&candidates, &[0.5, 0.5, 0.5]);

        assert_eq!(
            ranked.iter().map(|sc| sc.candidate.id).collect::<Vec<_>>(),
            vec![2, 5, 7]
        );
        assert_eq!(
            ranked.iter().map(|sc| sc.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_tie_break_independent_of_catalog_order() {
        let forward = vec![candidate(1, "A"), candidate(2, "B")];
        let backward = vec![candidate(2, "B"), candidate(1, "A")];

        let ranked_forward = rank_candidates(&forward, &[0.4, 0.4]);
        let ranked_backward = rank_candidates(&backward, &[0.4, 0.4]);

        assert_eq!(ranked_forward[0].candidate.id, 1);
        assert_eq!(ranked_backward[0].candidate.id, 1);
    }

    #[test]
    fn test_serde_flattens_candidate() {
        let ranked = rank_candidates(&[candidate(1, "A")], &[0.75]);
        let json = serde_json::to_value(&ranked[0]).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "A");
        assert_eq!(json["topsis_score"], 0.75);
        assert_eq!(json["rank"], 1);
    }
}
