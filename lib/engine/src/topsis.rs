//! The TOPSIS numeric pipeline
//!
//! Fixed-size array arithmetic over the decision matrix: column
//! normalization, weighting, ideal-solution extraction, and closeness
//! scoring. Stages are pure functions over `[f64; NUM_CRITERIA]` rows;
//! the catalog is small and the criteria count is compile-time known,
//! so there is no matrix library here.

use crate::weights::WeightVector;
use rankx_core::{CriterionKind, Error, Result, CRITERION_NAMES, NUM_CRITERIA};

/// Per-criterion reference points distances are measured against
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IdealSolutions {
    pub best: [f64; NUM_CRITERIA],
    pub worst: [f64; NUM_CRITERIA],
}

/// Vector-normalize each column by its Euclidean norm.
///
/// A zero-norm column means every candidate scores zero on that
/// criterion; dividing would produce NaN, so it is rejected before the
/// division ever happens.
pub(crate) fn normalize_matrix(matrix: &[[f64; NUM_CRITERIA]]) -> Result<Vec<[f64; NUM_CRITERIA]>> {
    let mut norms = [0.0f64; NUM_CRITERIA];
    for row in matrix {
        for j in 0..NUM_CRITERIA {
            norms[j] += row[j] * row[j];
        }
    }

    for (j, norm) in norms.iter_mut().enumerate() {
        *norm = norm.sqrt();
        if *norm == 0.0 {
            return Err(Error::DegenerateCriterion {
                criterion: CRITERION_NAMES[j],
            });
        }
    }

    Ok(matrix
        .iter()
        .map(|row| {
            let mut normalized = *row;
            for j in 0..NUM_CRITERIA {
                normalized[j] /= norms[j];
            }
            normalized
        })
        .collect())
}

/// Multiply each column by its criterion weight, in place
pub(crate) fn apply_weights(matrix: &mut [[f64; NUM_CRITERIA]], weights: &WeightVector) {
    for row in matrix.iter_mut() {
        for j in 0..NUM_CRITERIA {
            row[j] *= weights[j];
        }
    }
}

/// Extract the per-criterion best and worst values across candidates.
///
/// Beneficial criteria take max as best and min as worst; cost criteria
/// invert that.
pub(crate) fn ideal_solutions(
    matrix: &[[f64; NUM_CRITERIA]],
    criteria: &[CriterionKind; NUM_CRITERIA],
) -> IdealSolutions {
    let mut best = matrix[0];
    let mut worst = matrix[0];

    for row in &matrix[1..] {
        for j in 0..NUM_CRITERIA {
            if row[j] > best[j] {
                best[j] = row[j];
            }
            if row[j] < worst[j] {
                worst[j] = row[j];
            }
        }
    }

    for j in 0..NUM_CRITERIA {
        if !criteria[j].is_beneficial() {
            std::mem::swap(&mut best[j], &mut worst[j]);
        }
    }

    IdealSolutions { best, worst }
}

/// Euclidean distance between a weighted row and a reference point
fn euclidean_distance(row: &[f64; NUM_CRITERIA], reference: &[f64; NUM_CRITERIA]) -> f64 {
    let mut sum = 0.0;
    for j in 0..NUM_CRITERIA {
        let d = row[j] - reference[j];
        sum += d * d;
    }
    sum.sqrt()
}

/// Relative closeness to the ideal solution for every candidate row.
///
/// `score = d_worst / (d_best + d_worst)`, in [0, 1]. When a row
/// coincides with both ideal points (all candidates identical on every
/// weighted criterion) the ratio is undefined; the score is 0.5 by
/// convention - a neutral tie, not an error.
pub(crate) fn closeness_scores(
    matrix: &[[f64; NUM_CRITERIA]],
    ideals: &IdealSolutions,
) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| {
            let dist_best = euclidean_distance(row, &ideals.best);
            let dist_worst = euclidean_distance(row, &ideals.worst);
            let denominator = dist_best + dist_worst;
            if denominator == 0.0 {
                0.5
            } else {
                dist_worst / denominator
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankx_core::all_beneficial;

    fn plan_matrix() -> Vec<[f64; NUM_CRITERIA]> {
        vec![
            [8.0, 3.0, 2.0, 3.0, 4.0, 8.0],
            [7.0, 6.0, 5.0, 6.0, 7.0, 7.0],
            [5.0, 9.0, 8.0, 8.0, 9.0, 6.0],
        ]
    }

    #[test]
    fn test_normalized_columns_have_unit_norm() {
        let normalized = normalize_matrix(&plan_matrix()).unwrap();
        for j in 0..NUM_CRITERIA {
            let norm: f64 = normalized.iter().map(|row| row[j] * row[j]).sum();
            assert!((norm.sqrt() - 1.0).abs() < 1e-12, "column {} norm {}", j, norm);
        }
    }

    #[test]
    fn test_zero_column_rejected() {
        let matrix = vec![
            [1.0, 0.0, 2.0, 3.0, 4.0, 5.0],
            [2.0, 0.0, 3.0, 4.0, 5.0, 6.0],
        ];
        assert!(matches!(
            normalize_matrix(&matrix),
            Err(Error::DegenerateCriterion { criterion: "intensity" })
        ));
    }

    #[test]
    fn test_apply_weights() {
        let mut matrix = vec![[1.0; NUM_CRITERIA]];
        apply_weights(&mut matrix, &WeightVector::DEFAULT);
        assert_eq!(matrix[0], *WeightVector::DEFAULT.as_array());
    }

    #[test]
    fn test_ideal_solutions_beneficial() {
        let ideals = ideal_solutions(&plan_matrix(), &all_beneficial());
        assert_eq!(ideals.best, [8.0, 9.0, 8.0, 8.0, 9.0, 8.0]);
        assert_eq!(ideals.worst, [5.0, 3.0, 2.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_ideal_solutions_cost_inverts() {
        let mut criteria = all_beneficial();
        criteria[0] = CriterionKind::Cost;
        let ideals = ideal_solutions(&plan_matrix(), &criteria);
        // Cost criterion: best is the minimum, worst the maximum
        assert_eq!(ideals.best[0], 5.0);
        assert_eq!(ideals.worst[0], 8.0);
        // Remaining columns unchanged
        assert_eq!(ideals.best[1], 9.0);
        assert_eq!(ideals.worst[1], 3.0);
    }

    #[test]
    fn test_scores_in_unit_interval() {
        let normalized = normalize_matrix(&plan_matrix()).unwrap();
        let mut weighted = normalized;
        apply_weights(&mut weighted, &WeightVector::DEFAULT);
        let ideals = ideal_solutions(&weighted, &all_beneficial());
        let scores = closeness_scores(&weighted, &ideals);

        for score in &scores {
            assert!((0.0..=1.0).contains(score), "score {} out of range", score);
        }
    }

    #[test]
    fn test_extreme_rows_score_zero_and_one() {
        // One candidate dominates on every criterion, the other is dominated
        let matrix = vec![
            [9.0, 9.0, 9.0, 9.0, 9.0, 9.0],
            [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        ];
        let normalized = normalize_matrix(&matrix).unwrap();
        let mut weighted = normalized;
        apply_weights(&mut weighted, &WeightVector::DEFAULT);
        let ideals = ideal_solutions(&weighted, &all_beneficial());
        let scores = closeness_scores(&weighted, &ideals);

        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!(scores[1].abs() < 1e-12);
    }

    #[test]
    fn test_identical_rows_score_half() {
        let matrix = vec![[4.0; NUM_CRITERIA], [4.0; NUM_CRITERIA]];
        let normalized = normalize_matrix(&matrix).unwrap();
        let mut weighted = normalized;
        apply_weights(&mut weighted, &WeightVector::DEFAULT);
        let ideals = ideal_solutions(&weighted, &all_beneficial());
        let scores = closeness_scores(&weighted, &ideals);

        assert_eq!(scores, vec![0.5, 0.5]);
    }
}
