//! Priority derivation and consistency measurement.

use super::types::AhpResult;
use crate::pairwise::PairwiseMatrix;

/// Largest acceptable consistency ratio, inclusive.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty's random consistency index by matrix size: `RI[n - 1]` for
/// n = 1..=10. Sizes above 10 reuse the last entry.
pub const RANDOM_CONSISTENCY_INDEX: [f64; 10] =
    [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

fn random_index(n: usize) -> f64 {
    let idx = n.min(RANDOM_CONSISTENCY_INDEX.len());
    RANDOM_CONSISTENCY_INDEX[idx - 1]
}

/// Derives priority weights and consistency figures from a comparison matrix.
///
/// Uses the column-normalization method: each column is divided by its sum,
/// weights are the row averages of the normalized matrix, and λmax is the
/// sum of the weighted-sum vector `M · w`. This is the spreadsheet-style
/// approximation of the principal eigenvector; for a perfectly consistent
/// matrix it is exact (λmax = n, CR = 0).
///
/// Total over valid matrices: squareness and entry validity are enforced by
/// the [`PairwiseMatrix`] builders, so there is nothing left to fail here.
pub fn derive_priorities(matrix: &PairwiseMatrix) -> AhpResult {
    let n = matrix.n();
    let nf = n as f64;

    // Entries are strictly positive, so every column sum is too.
    let mut column_sums = vec![0.0; n];
    for row in matrix.rows() {
        for (j, &v) in row.iter().enumerate() {
            column_sums[j] += v;
        }
    }

    let normalized_matrix: Vec<Vec<f64>> = matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(&column_sums)
                .map(|(&v, &sum)| v / sum)
                .collect()
        })
        .collect();

    let weights: Vec<f64> = normalized_matrix
        .iter()
        .map(|row| row.iter().sum::<f64>() / nf)
        .collect();

    let weighted_sum: Vec<f64> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().zip(&weights).map(|(&v, &w)| v * w).sum())
        .collect();

    let lambda_max: f64 = weighted_sum.iter().sum();
    let ci = if n > 1 {
        (lambda_max - nf) / (nf - 1.0)
    } else {
        0.0
    };
    let ri = random_index(n);
    let cr = if ri > 0.0 { ci / ri } else { 0.0 };

    AhpResult {
        weights,
        normalized_matrix,
        weighted_sum,
        lambda_max,
        ci,
        cr,
        is_consistent: cr <= CONSISTENCY_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_ratings_are_perfectly_consistent() {
        // Ratings [9, 3, 1] give the exactly consistent matrix
        // M[i][j] = r[i]/r[j], so weights are r normalized: [9/13, 3/13, 1/13].
        let m = PairwiseMatrix::from_ratings(&[9.0, 3.0, 1.0], 3).unwrap();
        let result = derive_priorities(&m);

        assert!((result.weights[0] - 9.0 / 13.0).abs() < 1e-10);
        assert!((result.weights[1] - 3.0 / 13.0).abs() < 1e-10);
        assert!((result.weights[2] - 1.0 / 13.0).abs() < 1e-10);
        assert!((result.lambda_max - 3.0).abs() < 1e-10);
        assert!(result.ci.abs() < 1e-10);
        assert!(result.cr.abs() < 1e-10);
        assert!(result.is_consistent);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let m = PairwiseMatrix::from_comparisons(&[2.0, 4.0, 3.0], 3).unwrap();
        let result = derive_priorities(&m);

        let total: f64 = result.weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-10);
        assert!(result.weights.iter().all(|&w| w >= 0.0));
    }

    #[test]
    fn test_moderate_inconsistency_within_threshold() {
        // Upper triangle (0,1)=2, (0,2)=4, (1,2)=3. Not perfectly
        // transitive (2·3 ≠ 4) but close enough to pass.
        let m = PairwiseMatrix::from_comparisons(&[2.0, 4.0, 3.0], 3).unwrap();
        let result = derive_priorities(&m);

        assert!((result.weights[0] - 0.5571429).abs() < 1e-6);
        assert!((result.weights[1] - 0.3202381).abs() < 1e-6);
        assert!((result.weights[2] - 0.1226190).abs() < 1e-6);
        assert!((result.lambda_max - 3.0234127).abs() < 1e-6);
        assert!((result.ci - 0.0117063).abs() < 1e-6);
        assert!((result.cr - 0.0201834).abs() < 1e-6);
        assert!(result.is_consistent);
    }

    #[test]
    fn test_circular_preferences_flagged_inconsistent() {
        // A beats B, B beats C, C beats A — rock-paper-scissors. The
        // weights degenerate to 1/3 each and CR explodes.
        let m = PairwiseMatrix::from_comparisons(&[9.0, 1.0 / 9.0, 9.0], 3).unwrap();
        let result = derive_priorities(&m);

        for &w in &result.weights {
            assert!((w - 1.0 / 3.0).abs() < 1e-10);
        }
        assert!((result.lambda_max - 91.0 / 9.0).abs() < 1e-10);
        assert!((result.cr - 6.1302682).abs() < 1e-6);
        assert!(!result.is_consistent);

        // Still a valid result: weights remain usable for display.
        let total: f64 = result.weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_criteria_never_inconsistent() {
        // RI is zero for n = 2; any reciprocal 2×2 matrix is consistent.
        let m = PairwiseMatrix::from_comparisons(&[7.0], 2).unwrap();
        let result = derive_priorities(&m);

        assert!((result.weights[0] - 7.0 / 8.0).abs() < 1e-10);
        assert!((result.weights[1] - 1.0 / 8.0).abs() < 1e-10);
        assert!((result.lambda_max - 2.0).abs() < 1e-10);
        assert!(result.cr.abs() < 1e-12);
        assert!(result.is_consistent);
    }

    #[test]
    fn test_single_criterion() {
        let m = PairwiseMatrix::from_comparisons(&[], 1).unwrap();
        let result = derive_priorities(&m);

        assert_eq!(result.weights, vec![1.0]);
        assert!((result.lambda_max - 1.0).abs() < 1e-12);
        assert!(result.ci.abs() < 1e-12);
        assert!(result.cr.abs() < 1e-12);
        assert!(result.is_consistent);
    }

    #[test]
    fn test_matrix_larger_than_random_index_table() {
        // 12 criteria: the random index clamps to the n = 10 entry. An
        // all-equal matrix stays perfectly consistent.
        let ratings = vec![1.0; 12];
        let m = PairwiseMatrix::from_ratings(&ratings, 12).unwrap();
        let result = derive_priorities(&m);

        assert!((result.lambda_max - 12.0).abs() < 1e-9);
        assert!(result.cr.abs() < 1e-9);
        assert!(result.is_consistent);
        for &w in &result.weights {
            assert!((w - 1.0 / 12.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_normalized_matrix_columns_sum_to_one() {
        let m = PairwiseMatrix::from_comparisons(&[2.0, 4.0, 3.0], 3).unwrap();
        let result = derive_priorities(&m);

        for j in 0..3 {
            let col_sum: f64 = result.normalized_matrix.iter().map(|row| row[j]).sum();
            assert!((col_sum - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_random_index_table_values() {
        assert_eq!(RANDOM_CONSISTENCY_INDEX[0], 0.0);
        assert_eq!(RANDOM_CONSISTENCY_INDEX[1], 0.0);
        assert!((RANDOM_CONSISTENCY_INDEX[2] - 0.58).abs() < 1e-12);
        assert!((RANDOM_CONSISTENCY_INDEX[9] - 1.49).abs() < 1e-12);
    }
}
