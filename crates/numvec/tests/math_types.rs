//! Integration tests for the Array1 and Matrix containers.

use numvec::math::{Array1, Matrix};
use numvec::VectorError;

// ---------------------------------------------------------------------------
// Array1 basics
// ---------------------------------------------------------------------------

#[test]
fn array1_from_vec_and_len() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert_eq!(a.shape(), (3,));
    assert!(!a.is_empty());
}

#[test]
fn array1_empty() {
    let a: Array1<f64> = Array1::from_vec(vec![]);
    assert!(a.is_empty());
    assert_eq!(a.first(), None);
    assert_eq!(a.last(), None);
}

#[test]
fn array1_constructors() {
    assert_eq!(Array1::from_elem(3, 7i32).to_vec(), vec![7, 7, 7]);
    assert_eq!(Array1::<f64>::zeros(2).to_vec(), vec![0.0, 0.0]);
    assert_eq!(Array1::<i64>::ones(2).to_vec(), vec![1, 1]);
    let collected: Array1<i32> = (1..=3).collect();
    assert_eq!(collected, Array1::from(vec![1, 2, 3]));
}

#[test]
fn array1_select_and_mapv() {
    let a = Array1::from_vec(vec![10, 20, 30, 40, 50]);
    assert_eq!(a.select(&[0, 2, 4]).to_vec(), vec![10, 30, 50]);
    assert_eq!(a.mapv(|v| v / 10).to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn array1_widens_integers() {
    let a = Array1::from_vec(vec![1i32, -2, 3]);
    assert_eq!(a.to_f64().to_vec(), vec![1.0, -2.0, 3.0]);
}

#[test]
fn array1_display() {
    let a = Array1::from_vec(vec![1.5, 2.0]);
    assert_eq!(a.to_string(), "[1.5, 2]");
}

// ---------------------------------------------------------------------------
// Matrix basics
// ---------------------------------------------------------------------------

#[test]
fn matrix_from_shape_vec() {
    let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    assert_eq!(m[(1, 2)], 6);
    assert_eq!(m.shape(), Some((2, 3)));
}

#[test]
fn matrix_from_shape_vec_wrong_length() {
    assert!(matches!(
        Matrix::from_shape_vec((2, 2), vec![1, 2, 3]),
        Err(VectorError::DimensionMismatch { .. })
    ));
}

#[test]
fn matrix_ragged_rows_have_no_shape() {
    let m = Matrix::from(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(!m.is_rectangular());
    assert_eq!(m.shape(), None);
    assert!(m.require_rectangular("test").is_err());
    assert_eq!(m.get(1, 1), None);
    assert_eq!(m.get(0, 1), Some(&2.0));
}

#[test]
fn matrix_mapv_and_display() {
    let m = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    let doubled = m.mapv(|v| v * 2);
    assert_eq!(doubled.to_vec(), vec![vec![2, 4], vec![6, 8]]);
    assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
}
