//! Criterion definitions and the standard beach-assessment criteria set.

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Higher raw values are better (facilities, ratings).
    Benefit,
    /// Lower raw values are better (prices).
    Cost,
}

impl Polarity {
    /// Returns true for [`Polarity::Benefit`].
    pub fn is_benefit(&self) -> bool {
        matches!(self, Polarity::Benefit)
    }
}

/// A decision criterion.
///
/// The criteria set is owned by the caller and fixed for the duration of a
/// computation. `order_index` pins the criterion to a matrix row/column and
/// to a position in rating and pairwise input vectors — reordering criteria
/// between calls changes what the input positions mean, so callers must pass
/// criteria in `order_index` order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Caller-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether higher or lower raw values are preferred.
    pub polarity: Polarity,
    /// Position in matrices and input vectors (0-based, contiguous).
    pub order_index: usize,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(id: i64, name: impl Into<String>, polarity: Polarity, order_index: usize) -> Self {
        Self {
            id,
            name: name.into(),
            polarity,
            order_index,
        }
    }

    /// The standard five-criterion set for beach assessment, in canonical
    /// order: entrance ticket price and average food price are costs;
    /// public facilities, road condition, and the Google Maps rating are
    /// benefits.
    pub fn beach_defaults() -> Vec<Criterion> {
        vec![
            Criterion::new(1, "Ticket Price", Polarity::Cost, 0),
            Criterion::new(2, "Average Food Price", Polarity::Cost, 1),
            Criterion::new(3, "Public Facilities", Polarity::Benefit, 2),
            Criterion::new(4, "Road Condition", Polarity::Benefit, 3),
            Criterion::new(5, "Google Maps Rating", Polarity::Benefit, 4),
        ]
    }
}

/// Extracts the polarity vector from a criteria slice, in slice order.
pub fn polarities(criteria: &[Criterion]) -> Vec<Polarity> {
    criteria.iter().map(|c| c.polarity).collect()
}
