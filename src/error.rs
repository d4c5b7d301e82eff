//! Error types for decision computations.

use thiserror::Error;

/// Errors that reject invalid input before any computation runs.
///
/// Every variant is detected synchronously at operation entry; no partial
/// results are produced. An inconsistent comparison matrix (CR above the
/// acceptance threshold) is *not* an error — it is reported through
/// [`ConsistencyVerdict`](crate::decision::ConsistencyVerdict) so callers can
/// show the weights alongside a warning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The number of supplied values does not match what the criteria set
    /// requires (n ratings, or n·(n-1)/2 pairwise comparisons).
    #[error("Expected {expected} input values, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },

    /// A rating or comparison value is not a positive finite number.
    ///
    /// `index` is the position in the caller's input vector (row-major for
    /// full matrices), so the offending entry can be named in a message.
    #[error("Comparison value at index {index} must be a positive number, got {value}")]
    InvalidComparisonValue { index: usize, value: f64 },

    /// A caller-supplied matrix row has a different length than the matrix
    /// has rows.
    #[error("Matrix row {row} has {actual} entries, expected {expected}")]
    MatrixNotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two collections that must be index-aligned disagree in length
    /// (e.g. an alternative's criteria values vs. the weight vector).
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}
