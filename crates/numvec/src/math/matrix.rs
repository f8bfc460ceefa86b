use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use crate::error::{VectorError, VectorResult};
use crate::math::vector::Array1;

/// A sequence of rows.
///
/// Rows may differ in length when built with [`Matrix::from_rows`]; that is
/// what `check_consistency` exists to detect. Anything that needs a
/// rectangular matrix calls [`Matrix::require_rectangular`] first.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Matrix<T> {
    rows: Vec<Array1<T>>,
}

impl<T> Matrix<T> {
    pub fn from_rows(rows: Vec<Array1<T>>) -> Self {
        Self { rows }
    }

    /// Build a rectangular matrix from a row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> VectorResult<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(VectorError::DimensionMismatch {
                context: format!(
                    "invalid shape ({}, {}) for buffer of length {}",
                    rows,
                    cols,
                    data.len()
                ),
            });
        }
        let mut out = Vec::with_capacity(rows);
        let mut it = data.into_iter();
        for _ in 0..rows {
            out.push(it.by_ref().take(cols).collect());
        }
        Ok(Self { rows: out })
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, or 0 for an empty matrix.
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Array1<T>> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> Iter<'_, Array1<T>> {
        self.rows.iter()
    }

    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].len() == w[1].len())
    }

    /// `(rows, cols)` when rectangular.
    pub fn shape(&self) -> Option<(usize, usize)> {
        if self.is_rectangular() {
            Some((self.nrows(), self.ncols()))
        } else {
            None
        }
    }

    pub fn require_rectangular(&self, context: &str) -> VectorResult<(usize, usize)> {
        self.shape().ok_or_else(|| VectorError::DimensionMismatch {
            context: format!("{}: all rows must have the same length", context),
        })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.as_slice().get(col))
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows.iter().map(|r| r.mapv(&mut f)).collect(),
        }
    }

    pub fn into_rows(self) -> Vec<Array1<T>> {
        self.rows
    }
}

impl<T: Clone> Matrix<T> {
    pub fn to_vec(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|r| r.to_vec()).collect()
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(value: Vec<Vec<T>>) -> Self {
        Matrix::from_rows(value.into_iter().map(Array1::from_vec).collect())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.rows.iter().enumerate() {
            write!(f, "{}", row)?;
            if idx + 1 != self.rows.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
