//! Alternative types for SAW ranking.

/// A candidate destination with raw per-criterion scores.
///
/// `criteria_values` is indexed by criterion order and aggregated by the
/// caller before ranking — typically through
/// [`score_observations`](crate::assessment::score_observations).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// Caller-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Raw score per criterion, in criterion order.
    pub criteria_values: Vec<f64>,
}

impl Alternative {
    /// Creates an alternative.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: impl Into<String>,
        criteria_values: Vec<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            criteria_values,
        }
    }
}

/// An alternative with its SAW score and final standing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedAlternative {
    /// The candidate.
    pub alternative: Alternative,
    /// Normalized criteria values, in criterion order.
    pub normalized_values: Vec<f64>,
    /// Weighted sum of normalized values.
    pub final_score: f64,
    /// Standing, 1 = best. Ranks are consecutive; equal scores keep
    /// input order.
    pub rank: usize,
}
