//! Presentation-ready projection of a ranking.

use crate::criteria::Criterion;
use crate::error::EngineError;
use crate::saw::RankedAlternative;

/// Decimal places applied to every displayed numeric field.
pub const DISPLAY_DECIMALS: i32 = 4;

/// Rounds a value to [`DISPLAY_DECIMALS`] places.
pub fn round_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

/// One row of an entry's per-criterion breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionDetail {
    /// Criterion display name.
    pub name: String,
    /// Raw value, rounded.
    pub raw_value: f64,
    /// Normalized value, rounded.
    pub normalized_value: f64,
}

/// One ranked alternative, prepared for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportEntry {
    /// Alternative identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Standing, 1 = best.
    pub rank: usize,
    /// SAW score, rounded.
    pub final_score: f64,
    /// Raw criteria values in criterion order, rounded.
    pub raw_values: Vec<f64>,
    /// Normalized criteria values in criterion order, rounded.
    pub normalized_values: Vec<f64>,
    /// Per-criterion breakdown pairing each raw value with its
    /// normalized counterpart.
    pub details: Vec<CriterionDetail>,
}

/// The caller-facing ranking report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingReport {
    /// Entries in rank order, truncated to the requested top N.
    pub entries: Vec<ReportEntry>,
    /// Size of the full ranked set, before truncation.
    pub total_alternatives: usize,
}

/// Projects a ranking into a display report.
///
/// `ranked` is expected in rank order, as produced by
/// [`rank_alternatives`](crate::saw::rank_alternatives). Every numeric field
/// is rounded to [`DISPLAY_DECIMALS`] places; ranking itself always happens
/// on unrounded scores. `top_n` of `None` or `Some(0)` keeps every entry;
/// truncation never changes `total_alternatives`.
///
/// Errors with [`EngineError::DimensionMismatch`] when the criteria list
/// does not match the entries' value vectors.
pub fn build_report(
    ranked: &[RankedAlternative],
    criteria: &[Criterion],
    top_n: Option<usize>,
) -> Result<RankingReport, EngineError> {
    for r in ranked {
        if r.alternative.criteria_values.len() != criteria.len() {
            return Err(EngineError::DimensionMismatch {
                context: "criteria names",
                expected: r.alternative.criteria_values.len(),
                actual: criteria.len(),
            });
        }
    }

    let limit = match top_n {
        None | Some(0) => ranked.len(),
        Some(k) => k.min(ranked.len()),
    };

    let entries = ranked[..limit]
        .iter()
        .map(|r| {
            let raw_values: Vec<f64> = r
                .alternative
                .criteria_values
                .iter()
                .copied()
                .map(round_display)
                .collect();
            let normalized_values: Vec<f64> = r
                .normalized_values
                .iter()
                .copied()
                .map(round_display)
                .collect();
            let details = criteria
                .iter()
                .zip(raw_values.iter().zip(&normalized_values))
                .map(|(c, (&raw, &norm))| CriterionDetail {
                    name: c.name.clone(),
                    raw_value: raw,
                    normalized_value: norm,
                })
                .collect();
            ReportEntry {
                id: r.alternative.id,
                name: r.alternative.name.clone(),
                location: r.alternative.location.clone(),
                rank: r.rank,
                final_score: round_display(r.final_score),
                raw_values,
                normalized_values,
                details,
            }
        })
        .collect();

    Ok(RankingReport {
        entries,
        total_alternatives: ranked.len(),
    })
}
