//! Reductions and summary statistics.
//!
//! Reductions are generic over [`Element`], so integer arrays are summed in
//! their own type and only widened when a floating result (the mean) is
//! needed.
use itertools_num::ItertoolsNum;
use num_traits::AsPrimitive;

use crate::error::{VectorError, VectorResult};
use crate::math::{Array1, Element};

/// Left-to-right sum.
pub fn sum<T: Element>(array: &Array1<T>) -> T {
    array.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Arithmetic mean; an empty array has mean `0`.
pub fn mean<T: Element>(array: &Array1<T>) -> f64 {
    if array.is_empty() {
        return 0.0;
    }
    sum(array).as_() / array.len() as f64
}

/// Largest value and the index of its first occurrence.
pub fn max<T: Element>(array: &Array1<T>) -> VectorResult<(T, usize)> {
    extreme(array, "max", |v, best| v > best)
}

/// Smallest value and the index of its first occurrence.
pub fn min<T: Element>(array: &Array1<T>) -> VectorResult<(T, usize)> {
    extreme(array, "min", |v, best| v < best)
}

// Strict comparison: later equal values never replace the recorded index.
fn extreme<T, F>(array: &Array1<T>, context: &str, better: F) -> VectorResult<(T, usize)>
where
    T: Element,
    F: Fn(T, T) -> bool,
{
    let mut best = *array.first().ok_or_else(|| VectorError::EmptyInput {
        context: context.to_string(),
    })?;
    let mut index = 0;
    for (i, &value) in array.iter().enumerate() {
        if better(value, best) {
            best = value;
            index = i;
        }
    }
    Ok((best, index))
}

/// Running prefix sum; the first output equals the first input.
pub fn cumsum<T: Element>(array: &Array1<T>) -> Array1<T> {
    array.iter().copied().cumsum().collect()
}

/// Round each element to `decimals` fractional digits, half away from zero.
pub fn round(array: &Array1<f64>, decimals: i32) -> Array1<f64> {
    let scale = 10f64.powi(decimals);
    array.mapv(|v| (v * scale).round() / scale)
}

pub fn contains<T: Element>(array: &Array1<T>, value: T) -> bool {
    array.iter().any(|&v| v == value)
}

/// Distinct values in first-seen order.
pub fn unique<T: Element>(array: &Array1<T>) -> Array1<T> {
    let mut seen: Vec<T> = Vec::with_capacity(array.len());
    for &value in array.iter() {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    Array1::from_vec(seen)
}

/// True when both arrays have the same length and every pair differs by at
/// most `tol`.
pub fn all_close(a: &Array1<f64>, b: &Array1<f64>, tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}

pub fn any<T, F>(array: &Array1<T>, mut predicate: F) -> bool
where
    T: Element,
    F: FnMut(T) -> bool,
{
    array.iter().any(|&v| predicate(v))
}

pub fn all<T, F>(array: &Array1<T>, mut predicate: F) -> bool
where
    T: Element,
    F: FnMut(T) -> bool,
{
    array.iter().all(|&v| predicate(v))
}

/// Indices and values of the elements satisfying `predicate`.
pub fn where_indices<T, F>(array: &Array1<T>, mut predicate: F) -> (Vec<usize>, Array1<T>)
where
    T: Element,
    F: FnMut(T) -> bool,
{
    let mut indices = Vec::new();
    let mut values = Vec::new();
    for (i, &v) in array.iter().enumerate() {
        if predicate(v) {
            indices.push(i);
            values.push(v);
        }
    }
    (indices, Array1::from_vec(values))
}

/// `false` for infinite elements. `NaN` is reported as finite.
pub fn is_finite(array: &Array1<f64>) -> Vec<bool> {
    array.iter().map(|v| !v.is_infinite()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats() -> Array1<f64> {
        Array1::from_vec(vec![1.1, 1.2, 1.3, 1.4, 1.5, 1.1])
    }

    fn ints() -> Array1<i32> {
        Array1::from_vec(vec![1, 2, 3, 4, 5, 3])
    }

    #[test]
    fn sum_of_floats_and_ints() {
        assert_eq!(sum(&floats()), 7.6);
        assert_eq!(sum(&ints()), 18);
    }

    #[test]
    fn mean_widens_ints() {
        assert_eq!(mean(&ints()), 3.0);
        assert_eq!(mean(&Array1::<f64>::from_vec(vec![])), 0.0);
    }

    #[test]
    fn max_and_min_report_first_index() {
        assert_eq!(max(&ints()).unwrap(), (5, 4));
        assert_eq!(min(&floats()).unwrap(), (1.1, 0));
        let ties = Array1::from_vec(vec![2.0, 7.0, 7.0, 1.0, 1.0]);
        assert_eq!(max(&ties).unwrap(), (7.0, 1));
        assert_eq!(min(&ties).unwrap(), (1.0, 3));
    }

    #[test]
    fn max_of_empty_is_an_error() {
        let empty: Array1<f64> = Array1::from_vec(vec![]);
        assert!(matches!(max(&empty), Err(VectorError::EmptyInput { .. })));
    }

    #[test]
    fn cumsum_starts_at_first_element() {
        let out = round(&cumsum(&floats()), 1);
        assert_eq!(out.to_vec(), vec![1.1, 2.3, 3.6, 5.0, 6.5, 7.6]);
        assert_eq!(cumsum(&ints()).to_vec(), vec![1, 3, 6, 10, 15, 18]);
        assert!(cumsum(&Array1::<f64>::from_vec(vec![])).is_empty());
    }

    #[test]
    fn round_is_half_away_from_zero() {
        let a = Array1::from_vec(vec![0.5, -0.5, 2.345, -1.25]);
        assert_eq!(round(&a, 0).to_vec(), vec![1.0, -1.0, 2.0, -1.0]);
        assert_eq!(round(&a, 1).to_vec(), vec![0.5, -0.5, 2.3, -1.3]);
    }

    #[test]
    fn unique_keeps_first_seen_order() {
        assert_eq!(unique(&ints()).to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(unique(&floats()).to_vec(), vec![1.1, 1.2, 1.3, 1.4, 1.5]);
    }

    #[test]
    fn contains_and_predicates() {
        assert!(contains(&floats(), 1.1));
        assert!(!contains(&floats(), 1.11));
        assert!(any(&ints(), |v| v > 4));
        assert!(all(&ints(), |v| v > 0));
        let (idx, vals) = where_indices(&floats(), |v| (1.2..=1.4).contains(&v));
        assert_eq!(idx, vec![1, 2, 3]);
        assert_eq!(vals.to_vec(), vec![1.2, 1.3, 1.4]);
    }

    #[test]
    fn all_close_checks_length() {
        assert!(all_close(&floats(), &floats(), 1e-10));
        assert!(!all_close(&floats(), &Array1::from_vec(vec![1.1]), 1e-10));
    }

    #[test]
    fn is_finite_flags_infinities_only() {
        let a = Array1::from_vec(vec![1.0, f64::INFINITY, f64::NAN]);
        assert_eq!(is_finite(&a), vec![true, false, true]);
    }
}
