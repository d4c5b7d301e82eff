//! Pairwise comparison matrices and their builders.
//!
//! A [`PairwiseMatrix`] is the square, positive, reciprocal matrix that AHP
//! weighting runs on. All three builders validate at entry and return typed
//! errors, so a constructed matrix always satisfies the structural
//! invariants: every entry positive and finite, `M[i][i] = 1`, and
//! `M[j][i] = 1/M[i][j]`.
//!
//! Callers say explicitly which input form they are supplying via
//! [`ComparisonInput`] — nothing is inferred from vector length.

use crate::error::EngineError;

/// Tolerance for diagonal and reciprocity checks on caller-supplied rows.
const RECIPROCITY_TOLERANCE: f64 = 1e-6;

/// Number of upper-triangle comparisons for an n×n matrix: n·(n-1)/2.
pub fn comparison_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Criteria comparison input, tagged by form.
///
/// `Ratings` is the legacy form: one importance rating per criterion, in
/// criteria order; the matrix entry (i, j) becomes `rating[i] / rating[j]`.
/// `Pairwise` is the full Saaty form: exactly n·(n-1)/2 values filling the
/// upper triangle in ascending (i, j) order — (0,1), (0,2), …, (1,2), ….
///
/// Values conventionally sit on the Saaty 1–9 scale (with reciprocals down
/// to 1/9), but only strict positivity and finiteness are enforced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "values", rename_all = "lowercase")
)]
pub enum ComparisonInput {
    /// One importance rating per criterion.
    Ratings(Vec<f64>),
    /// Upper-triangle pairwise comparisons in ascending (i, j) order.
    Pairwise(Vec<f64>),
}

impl ComparisonInput {
    /// Builds the comparison matrix for `n` criteria from this input.
    pub fn build_matrix(&self, n: usize) -> Result<PairwiseMatrix, EngineError> {
        match self {
            ComparisonInput::Ratings(ratings) => PairwiseMatrix::from_ratings(ratings, n),
            ComparisonInput::Pairwise(values) => PairwiseMatrix::from_comparisons(values, n),
        }
    }
}

/// A validated n×n positive reciprocal comparison matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    n: usize,
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Builds the matrix from per-criterion importance ratings:
    /// `M[i][j] = rating[i] / rating[j]`.
    ///
    /// Errors with [`EngineError::InvalidInputShape`] when the rating count
    /// differs from `n` (or `n` is zero), and
    /// [`EngineError::InvalidComparisonValue`] for any rating that is not a
    /// positive finite number.
    pub fn from_ratings(ratings: &[f64], n: usize) -> Result<Self, EngineError> {
        check_criteria_count(n)?;
        if ratings.len() != n {
            return Err(EngineError::InvalidInputShape {
                expected: n,
                actual: ratings.len(),
            });
        }
        for (i, &r) in ratings.iter().enumerate() {
            check_positive(r, i)?;
        }

        let mut rows = vec![vec![1.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let v = ratings[i] / ratings[j];
                rows[i][j] = v;
                rows[j][i] = 1.0 / v;
            }
        }
        Ok(Self { n, rows })
    }

    /// Builds the matrix from upper-triangle comparisons in ascending
    /// (i, j) order; the lower triangle is filled with reciprocals.
    ///
    /// Errors with [`EngineError::InvalidInputShape`] when the value count
    /// differs from n·(n-1)/2, and [`EngineError::InvalidComparisonValue`]
    /// for any value that is not a positive finite number.
    pub fn from_comparisons(values: &[f64], n: usize) -> Result<Self, EngineError> {
        check_criteria_count(n)?;
        let expected = comparison_count(n);
        if values.len() != expected {
            return Err(EngineError::InvalidInputShape {
                expected,
                actual: values.len(),
            });
        }
        for (i, &v) in values.iter().enumerate() {
            check_positive(v, i)?;
        }

        let mut rows = vec![vec![1.0; n]; n];
        let mut idx = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let v = values[idx];
                rows[i][j] = v;
                rows[j][i] = 1.0 / v;
                idx += 1;
            }
        }
        Ok(Self { n, rows })
    }

    /// Validates a caller-supplied full matrix.
    ///
    /// Checks squareness ([`EngineError::MatrixNotSquare`] names the first
    /// offending row), then entry validity: every entry positive and finite,
    /// unit diagonal, and `M[i][j] · M[j][i] ≈ 1` within a small tolerance.
    /// Entry violations are reported as
    /// [`EngineError::InvalidComparisonValue`] with the row-major flat index;
    /// a reciprocity violation names the lower-triangle entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, EngineError> {
        let n = rows.len();
        check_criteria_count(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(EngineError::MatrixNotSquare {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                check_positive(v, i * n + j)?;
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if (row[i] - 1.0).abs() > RECIPROCITY_TOLERANCE {
                return Err(EngineError::InvalidComparisonValue {
                    index: i * n + i,
                    value: row[i],
                });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if (rows[i][j] * rows[j][i] - 1.0).abs() > RECIPROCITY_TOLERANCE {
                    return Err(EngineError::InvalidComparisonValue {
                        index: j * n + i,
                        value: rows[j][i],
                    });
                }
            }
        }
        Ok(Self { n, rows })
    }

    /// Matrix dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry at (i, j). Indices must be in range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// All rows, outer index = row.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

fn check_criteria_count(n: usize) -> Result<(), EngineError> {
    if n == 0 {
        return Err(EngineError::InvalidInputShape {
            expected: 1,
            actual: 0,
        });
    }
    Ok(())
}

fn check_positive(value: f64, index: usize) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidComparisonValue { index, value })
    }
}
