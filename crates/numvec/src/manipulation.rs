//! Positional edits, stacking and reshaping.
use crate::error::{VectorError, VectorResult};
use crate::math::{Array1, Element, Matrix};

fn check_index(index: usize, len: usize) -> VectorResult<()> {
    // Same bound for insert and delete: appending at `len` is rejected.
    if len == 0 || index > len - 1 {
        return Err(VectorError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Insert `value` before position `index`.
///
/// `index` must address an existing element, so inserting at the very end
/// (`index == len`) is an error.
pub fn insert<T: Element>(array: &Array1<T>, index: usize, value: T) -> VectorResult<Array1<T>> {
    check_index(index, array.len())?;
    let src = array.as_slice();
    let mut out = Vec::with_capacity(src.len() + 1);
    out.extend_from_slice(&src[..index]);
    out.push(value);
    out.extend_from_slice(&src[index..]);
    Ok(Array1::from_vec(out))
}

/// Remove the element at `index`.
pub fn delete<T: Element>(array: &Array1<T>, index: usize) -> VectorResult<Array1<T>> {
    check_index(index, array.len())?;
    let src = array.as_slice();
    let mut out = Vec::with_capacity(src.len() - 1);
    out.extend_from_slice(&src[..index]);
    out.extend_from_slice(&src[index + 1..]);
    Ok(Array1::from_vec(out))
}

/// Stack equal-length arrays as the columns of a matrix.
pub fn column_stack<T: Element>(arrays: &[Array1<T>]) -> VectorResult<Matrix<T>> {
    let first = arrays.first().ok_or_else(|| VectorError::EmptyInput {
        context: "column_stack".to_string(),
    })?;
    if let Some(bad) = arrays.iter().find(|a| a.len() != first.len()) {
        return Err(VectorError::LengthMismatch {
            expected: first.len(),
            found: bad.len(),
        });
    }
    let rows = (0..first.len())
        .map(|i| arrays.iter().map(|a| a[i]).collect())
        .collect();
    Ok(Matrix::from_rows(rows))
}

/// Stack equal-length arrays as the rows of a matrix.
pub fn row_stack<T: Element>(arrays: &[Array1<T>]) -> VectorResult<Matrix<T>> {
    let matrix = Matrix::from_rows(arrays.to_vec());
    matrix.require_rectangular("row_stack")?;
    Ok(matrix)
}

/// True iff every row has the same length.
pub fn check_consistency<T>(matrix: &Matrix<T>) -> bool {
    matrix.is_rectangular()
}

pub fn transpose<T: Element>(matrix: &Matrix<T>) -> VectorResult<Matrix<T>> {
    let (nrows, ncols) = matrix.require_rectangular("transpose")?;
    let rows = (0..ncols)
        .map(|c| (0..nrows).map(|r| matrix[(r, c)]).collect())
        .collect();
    Ok(Matrix::from_rows(rows))
}

/// Rotate right by `shift`; elements past the end wrap to the front.
pub fn roll<T: Element>(array: &Array1<T>, shift: usize) -> VectorResult<Array1<T>> {
    if shift > array.len() {
        return Err(VectorError::IndexOutOfRange {
            index: shift,
            len: array.len(),
        });
    }
    let mut out = array.to_vec();
    out.rotate_right(shift);
    Ok(Array1::from_vec(out))
}

pub fn flip<T: Element>(array: &Array1<T>) -> Array1<T> {
    array.iter().rev().copied().collect()
}

/// `reps` copies of `array` as the rows of a matrix.
pub fn tile<T: Element>(array: &Array1<T>, reps: usize) -> Matrix<T> {
    Matrix::from_rows(vec![array.clone(); reps])
}

pub fn repeat<T: Element>(value: T, reps: usize) -> Array1<T> {
    Array1::from_elem(reps, value)
}

/// Column `index` across all rows.
pub fn get_column<T: Element>(matrix: &Matrix<T>, index: usize) -> VectorResult<Array1<T>> {
    matrix
        .rows()
        .map(|row| {
            row.as_slice()
                .get(index)
                .copied()
                .ok_or(VectorError::IndexOutOfRange {
                    index,
                    len: row.len(),
                })
        })
        .collect::<VectorResult<Vec<T>>>()
        .map(Array1::from_vec)
}

/// Coordinate matrices of shape `len(y) x len(x)`: the first repeats `x`
/// on every row, the second holds `y[i]` across row `i`.
pub fn meshgrid<T: Element>(x: &Array1<T>, y: &Array1<T>) -> (Matrix<T>, Matrix<T>) {
    let x_grid = tile(x, y.len());
    let y_grid = Matrix::from_rows(y.iter().map(|&v| repeat(v, x.len())).collect());
    (x_grid, y_grid)
}

pub fn zeros(rows: usize, cols: usize) -> Matrix<f64> {
    Matrix::from_rows(vec![Array1::zeros(cols); rows])
}

pub fn ones(len: usize) -> Array1<f64> {
    Array1::ones(len)
}

/// Values from `start` towards `stop` (exclusive) in increments of `step`.
///
/// Each value is the previous plus `step`, so long ranges accumulate
/// rounding error. A zero or non-finite step, or non-finite bounds, yield an
/// empty array. Accumulation stops early once adding `step` no longer
/// changes the running value.
pub fn arange(start: f64, stop: f64, step: f64) -> Array1<f64> {
    let mut out = Vec::new();
    if step == 0.0 || !step.is_finite() || !start.is_finite() || !stop.is_finite() {
        return Array1::from_vec(out);
    }
    let mut current = start;
    while (step > 0.0 && current < stop) || (step < 0.0 && current > stop) {
        out.push(current);
        let next = current + step;
        if next == current {
            log::debug!("arange stalled at {} with step {}", current, step);
            break;
        }
        current = next;
    }
    Array1::from_vec(out)
}

/// Total number of elements across all rows.
pub fn size<T>(matrix: &Matrix<T>) -> usize {
    matrix.rows().map(|r| r.len()).sum()
}
