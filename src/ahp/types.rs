//! AHP result type.

/// Output of [`derive_priorities`](super::derive_priorities).
///
/// All vectors are indexed by criterion order. Recomputed on every call;
/// nothing is cached between invocations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpResult {
    /// Priority weights, one per criterion. Non-negative and summing to 1.
    pub weights: Vec<f64>,
    /// The column-normalized comparison matrix.
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Weighted-sum vector `M · w`.
    pub weighted_sum: Vec<f64>,
    /// Principal-eigenvalue estimate, the sum of the weighted-sum vector.
    pub lambda_max: f64,
    /// Consistency index `(λmax − n) / (n − 1)`; zero for n = 1.
    pub ci: f64,
    /// Consistency ratio `CI / RI`; zero where the random index is zero.
    pub cr: f64,
    /// Whether `cr` is within [`CONSISTENCY_THRESHOLD`](super::CONSISTENCY_THRESHOLD).
    pub is_consistent: bool,
}
