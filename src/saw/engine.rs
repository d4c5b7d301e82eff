//! Column normalization, weighted scoring, and ranking.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::{Alternative, RankedAlternative};
use crate::criteria::Polarity;
use crate::error::EngineError;

/// Ranks alternatives by SAW score, best first.
///
/// Each criterion column is normalized by polarity — benefit values as
/// `v / max`, cost values as `min-positive / v` — then combined with the
/// weight vector. The full set is always ranked; truncation for display
/// belongs to the report layer.
///
/// Zero and negative raw values normalize to 0 ("no data", never an
/// infinitely good cost); a column with no positive values normalizes to
/// all zeros. An empty alternative list yields an empty ranking.
///
/// Errors with [`EngineError::DimensionMismatch`] when `polarities` and
/// `weights` disagree in length, or when any alternative carries a
/// different number of criteria values.
pub fn rank_alternatives(
    alternatives: &[Alternative],
    weights: &[f64],
    polarities: &[Polarity],
) -> Result<Vec<RankedAlternative>, EngineError> {
    if polarities.len() != weights.len() {
        return Err(EngineError::DimensionMismatch {
            context: "polarities",
            expected: weights.len(),
            actual: polarities.len(),
        });
    }
    for alt in alternatives {
        if alt.criteria_values.len() != weights.len() {
            return Err(EngineError::DimensionMismatch {
                context: "criteria values",
                expected: weights.len(),
                actual: alt.criteria_values.len(),
            });
        }
    }
    if alternatives.is_empty() {
        return Ok(Vec::new());
    }

    let normalized = normalize_columns(alternatives, polarities);
    let scores = weighted_scores(&normalized, weights);

    let mut order: Vec<usize> = (0..alternatives.len()).collect();
    // Stable sort: equal scores keep input order.
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    Ok(order
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| RankedAlternative {
            alternative: alternatives[idx].clone(),
            normalized_values: normalized[idx].clone(),
            final_score: scores[idx],
            rank: pos + 1,
        })
        .collect())
}

fn normalize_columns(alternatives: &[Alternative], polarities: &[Polarity]) -> Vec<Vec<f64>> {
    let mut normalized = vec![vec![0.0; polarities.len()]; alternatives.len()];

    for (j, polarity) in polarities.iter().enumerate() {
        match polarity {
            Polarity::Benefit => {
                let max = alternatives
                    .iter()
                    .map(|a| a.criteria_values[j])
                    .fold(f64::NEG_INFINITY, f64::max);
                if max > 0.0 {
                    for (i, alt) in alternatives.iter().enumerate() {
                        let v = alt.criteria_values[j];
                        normalized[i][j] = if v > 0.0 { v / max } else { 0.0 };
                    }
                }
            }
            Polarity::Cost => {
                let min_positive = alternatives
                    .iter()
                    .map(|a| a.criteria_values[j])
                    .filter(|&v| v > 0.0)
                    .fold(f64::INFINITY, f64::min);
                if min_positive.is_finite() {
                    for (i, alt) in alternatives.iter().enumerate() {
                        let v = alt.criteria_values[j];
                        normalized[i][j] = if v > 0.0 { min_positive / v } else { 0.0 };
                    }
                }
            }
        }
    }
    normalized
}

fn weighted_scores(normalized: &[Vec<f64>], weights: &[f64]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        normalized.par_iter().map(|row| dot(row, weights)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        normalized.iter().map(|row| dot(row, weights)).collect()
    }
}

fn dot(values: &[f64], weights: &[f64]) -> f64 {
    values.iter().zip(weights).map(|(&v, &w)| v * w).sum()
}
