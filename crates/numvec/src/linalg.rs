//! Dot products, matrix multiplication, 2x2 inversion and line fitting.
use serde::{Deserialize, Serialize};

use crate::arithmetic::{multiply, power};
use crate::error::{VectorError, VectorResult};
use crate::manipulation::transpose;
use crate::math::{Array1, Matrix};
use crate::stats::sum;

/// Coefficients of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
}

/// `Σ a[i] * b[i]`.
pub fn dot(a: &Array1<f64>, b: &Array1<f64>) -> VectorResult<f64> {
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Matrix product `a · b`.
///
/// Both `a` and `b` must be rectangular and `a`'s column count must equal
/// `b`'s row count.
pub fn matmul(a: &Matrix<f64>, b: &Matrix<f64>) -> VectorResult<Matrix<f64>> {
    let (_, a_cols) = a.require_rectangular("matmul lhs")?;
    let b_t = transpose(b)?;
    if a_cols != b.nrows() {
        return Err(VectorError::DimensionMismatch {
            context: format!(
                "matmul: lhs has {} columns but rhs has {} rows",
                a_cols,
                b.nrows()
            ),
        });
    }

    let mut rows = Vec::with_capacity(a.nrows());
    for row in a.rows() {
        let out = b_t
            .rows()
            .map(|col| dot(row, col))
            .collect::<VectorResult<Array1<f64>>>()?;
        rows.push(out);
    }
    Ok(Matrix::from_rows(rows))
}

/// Closed-form inverse of a 2x2 matrix.
///
/// A singular input is not rejected: the reciprocal determinant becomes
/// `Inf` and the entries follow IEEE rules.
pub fn inverse(m: &Matrix<f64>) -> VectorResult<Matrix<f64>> {
    if m.nrows() != 2 || m.rows().any(|r| r.len() != 2) {
        return Err(VectorError::UnsupportedShape {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
    let coef = 1.0 / (a * d - b * c);
    Ok(Matrix::from(vec![
        vec![d * coef, -b * coef],
        vec![-c * coef, a * coef],
    ]))
}

/// Degree-1 least-squares fit solved through the normal equations.
pub fn polyfit(x: &Array1<f64>, y: &Array1<f64>) -> VectorResult<FitResult> {
    if x.len() != y.len() {
        return Err(VectorError::LengthMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    let sum_x = sum(x);
    let sum_y = sum(y);
    let sum_x2 = sum(&power(x, 2.0)?);
    let sum_xy = sum(&multiply(x, y)?);

    let a = Matrix::from(vec![vec![sum_x, x.len() as f64], vec![sum_x2, sum_x]]);
    let b = Matrix::from(vec![vec![sum_y], vec![sum_xy]]);
    let coeff = matmul(&inverse(&a)?, &b)?;
    let fit = FitResult {
        slope: coeff[(0, 0)],
        intercept: coeff[(1, 0)],
    };
    log::debug!(
        "polyfit over {} points: slope={} intercept={}",
        x.len(),
        fit.slope,
        fit.intercept
    );
    Ok(fit)
}
