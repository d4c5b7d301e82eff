//! The full decision pipeline: comparisons in, ranked beaches out.
//!
//! [`evaluate`] wires the stages together the way the assessment workflow
//! uses them: build the comparison matrix from tagged input, derive AHP
//! priorities, gate on the consistency verdict, then SAW-rank and project a
//! display report. An inconsistent comparison set still yields a full
//! outcome — weights, consistency figures, and an advisory message — just
//! without a ranking, so the caller can ask the user to revise judgements.

use tracing::debug;

use crate::ahp::{self, AhpResult, CONSISTENCY_THRESHOLD};
use crate::criteria::{polarities, Criterion, Polarity};
use crate::error::EngineError;
use crate::pairwise::{ComparisonInput, PairwiseMatrix};
use crate::report::{build_report, round_display, RankingReport};
use crate::saw::{rank_alternatives, Alternative};

/// A complete decision problem.
///
/// `criteria` must be in `order_index` order; comparison input and
/// alternative values are interpreted positionally against it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionRequest {
    /// Criteria in canonical order.
    pub criteria: Vec<Criterion>,
    /// Criteria comparison input, tagged by form.
    pub input: ComparisonInput,
    /// Candidate destinations.
    pub alternatives: Vec<Alternative>,
    /// Report entries to keep; `None` or `Some(0)` keeps all.
    pub top_n: Option<usize>,
}

/// AHP figures rounded for display.
///
/// Ranking always runs on the unrounded weights; this block exists so the
/// caller can render every intermediate of the computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpSummary {
    /// Priority weights in criterion order.
    pub weights: Vec<f64>,
    /// Principal-eigenvalue estimate.
    pub lambda_max: f64,
    /// Consistency index.
    pub ci: f64,
    /// Consistency ratio.
    pub cr: f64,
    /// Weighted-sum vector.
    pub weighted_sum: Vec<f64>,
    /// Column-normalized comparison matrix.
    pub normalized_matrix: Vec<Vec<f64>>,
    /// The comparison matrix the computation ran on.
    pub pairwise_matrix: Vec<Vec<f64>>,
    /// Whether the comparisons passed the consistency check.
    pub is_consistent: bool,
}

/// One criterion with its derived weight, for the report header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionWeight {
    /// Criterion identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Benefit or cost.
    pub polarity: Polarity,
    /// The rating the caller supplied, echoed back; `None` for pairwise
    /// input, which has no per-criterion rating.
    pub rating: Option<f64>,
    /// Derived weight, rounded.
    pub weight: f64,
    /// Derived weight as a percentage, rounded.
    pub weight_percent: f64,
}

/// The consistency gate's outcome.
///
/// Inconsistency is a valid result, sharply distinct from invalid input:
/// the request was well-formed, but the judgements contradict each other
/// too much for the ranking to mean anything.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyVerdict {
    /// Whether CR passed the threshold.
    pub consistent: bool,
    /// Consistency ratio, rounded.
    pub cr: f64,
    /// Advisory text for the caller's warning banner; `None` when
    /// consistent.
    pub message: Option<String>,
}

/// Everything the caller needs to render a decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionOutcome {
    /// Display-rounded AHP figures.
    pub ahp: AhpSummary,
    /// Criteria with their derived weights, in criterion order.
    pub criteria: Vec<CriterionWeight>,
    /// The consistency gate's outcome.
    pub verdict: ConsistencyVerdict,
    /// Ranked destinations; `None` when the comparisons were inconsistent.
    pub ranking: Option<RankingReport>,
}

/// Runs the full pipeline for one decision request.
///
/// All input shapes are validated before any computation, so shape errors
/// surface even when the comparisons would have failed the consistency
/// check anyway.
pub fn evaluate(request: &DecisionRequest) -> Result<DecisionOutcome, EngineError> {
    let n = request.criteria.len();
    let matrix = request.input.build_matrix(n)?;
    for alt in &request.alternatives {
        if alt.criteria_values.len() != n {
            return Err(EngineError::DimensionMismatch {
                context: "criteria values",
                expected: n,
                actual: alt.criteria_values.len(),
            });
        }
    }
    debug!(
        criteria = n,
        alternatives = request.alternatives.len(),
        "comparison matrix built"
    );

    let result = ahp::derive_priorities(&matrix);
    debug!(
        cr = result.cr,
        consistent = result.is_consistent,
        "priorities derived"
    );

    let criteria = criterion_weights(request, &result);
    let verdict = consistency_verdict(&result);

    let ranking = if result.is_consistent {
        let ranked = rank_alternatives(
            &request.alternatives,
            &result.weights,
            &polarities(&request.criteria),
        )?;
        debug!(ranked = ranked.len(), "alternatives ranked");
        Some(build_report(&ranked, &request.criteria, request.top_n)?)
    } else {
        None
    };

    Ok(DecisionOutcome {
        ahp: summarize(&matrix, &result),
        criteria,
        verdict,
        ranking,
    })
}

fn criterion_weights(request: &DecisionRequest, result: &AhpResult) -> Vec<CriterionWeight> {
    request
        .criteria
        .iter()
        .zip(&result.weights)
        .enumerate()
        .map(|(i, (c, &w))| CriterionWeight {
            id: c.id,
            name: c.name.clone(),
            polarity: c.polarity,
            rating: match &request.input {
                ComparisonInput::Ratings(ratings) => Some(ratings[i]),
                ComparisonInput::Pairwise(_) => None,
            },
            weight: round_display(w),
            weight_percent: round_display(w * 100.0),
        })
        .collect()
}

fn consistency_verdict(result: &AhpResult) -> ConsistencyVerdict {
    let message = if result.is_consistent {
        None
    } else {
        Some(format!(
            "Comparisons are inconsistent: CR = {:.4} exceeds {:.2}. \
             Soften the most extreme judgements (avoid pairing 9 against 1/9) \
             and try again.",
            result.cr, CONSISTENCY_THRESHOLD
        ))
    };
    ConsistencyVerdict {
        consistent: result.is_consistent,
        cr: round_display(result.cr),
        message,
    }
}

fn summarize(matrix: &PairwiseMatrix, result: &AhpResult) -> AhpSummary {
    AhpSummary {
        weights: round_vec(&result.weights),
        lambda_max: round_display(result.lambda_max),
        ci: round_display(result.ci),
        cr: round_display(result.cr),
        weighted_sum: round_vec(&result.weighted_sum),
        normalized_matrix: result.normalized_matrix.iter().map(|r| round_vec(r)).collect(),
        pairwise_matrix: matrix.rows().iter().map(|r| round_vec(r)).collect(),
        is_consistent: result.is_consistent,
    }
}

fn round_vec(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(round_display).collect()
}
