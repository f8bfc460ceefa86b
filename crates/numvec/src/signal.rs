//! Differences, cumulative trapezoidal integration, norms and phase
//! unwrapping.
use std::f64::consts::PI;

use crate::error::{VectorError, VectorResult};
use crate::math::Array1;
use crate::stats::{cumsum, sum};

/// Forward first difference: `out[i] = array[i + 1] - array[i]`.
pub fn diff(array: &Array1<f64>) -> Array1<f64> {
    array
        .as_slice()
        .windows(2)
        .map(|w| w[1] - w[0])
        .collect()
}

/// Cumulative trapezoidal integral of `f` sampled at positions `x`.
///
/// `x` must be strictly increasing and have at least two samples. The
/// output has `len - 1` entries; the first is the area of the first
/// trapezoid, not a leading zero.
pub fn cumtrapz(x: &Array1<f64>, f: &Array1<f64>) -> VectorResult<Array1<f64>> {
    if x.len() != f.len() {
        return Err(VectorError::LengthMismatch {
            expected: x.len(),
            found: f.len(),
        });
    }
    if x.len() < 2 {
        return Err(VectorError::InsufficientData {
            required: 2,
            found: x.len(),
        });
    }
    let xs = x.as_slice();
    if xs.windows(2).any(|w| !(w[0] < w[1])) {
        return Err(VectorError::UnsortedInput);
    }
    let fs = f.as_slice();
    log::debug!("cumtrapz over {} samples", xs.len());
    let increments = (0..xs.len() - 1).map(|i| 0.5 * (xs[i + 1] - xs[i]) * (fs[i + 1] + fs[i]));
    Ok(accumulate(increments))
}

/// Cumulative trapezoidal integral of `f` sampled every `dx`.
///
/// When `initial` is given it is prepended, so the output has the same
/// length as `f`.
pub fn cumtrapz_dx(
    f: &Array1<f64>,
    dx: f64,
    initial: Option<f64>,
) -> VectorResult<Array1<f64>> {
    if f.len() < 2 {
        return Err(VectorError::InsufficientData {
            required: 2,
            found: f.len(),
        });
    }
    let fs = f.as_slice();
    let integral = accumulate(fs.windows(2).map(|w| 0.5 * dx * (w[1] + w[0])));
    Ok(match initial {
        Some(v) => std::iter::once(v).chain(integral.iter().copied()).collect(),
        None => integral,
    })
}

fn accumulate<I: Iterator<Item = f64>>(increments: I) -> Array1<f64> {
    increments
        .scan(0.0, |acc, n| {
            *acc += n;
            Some(*acc)
        })
        .collect()
}

/// Euclidean norm.
pub fn norm(array: &Array1<f64>) -> f64 {
    sum(&array.mapv(|v| v * v)).sqrt()
}

/// Remove `2π` jumps from a phase signal.
///
/// Successive differences are reduced into `[-π, π)`; a reduced value of
/// exactly `-π` becomes `π` when the raw difference was positive. Jumps
/// smaller than `π` are left alone. The accumulated correction is added to
/// every element after the first.
pub fn unwrap(array: &Array1<f64>) -> Array1<f64> {
    let (discont, period) = (PI, 2.0 * PI);
    let (low, high) = (-period / 2.0, period / 2.0);
    if array.len() < 2 {
        return array.clone();
    }

    let dd = diff(array);
    let ph_correct: Array1<f64> = dd
        .iter()
        .map(|&d| {
            let mut dd_mod = (d - low).rem_euclid(period) + low;
            if dd_mod == low && d > 0.0 {
                dd_mod = high;
            }
            if d.abs() < discont {
                0.0
            } else {
                dd_mod - d
            }
        })
        .collect();

    let correction = cumsum(&ph_correct);
    let corrected = array
        .iter()
        .skip(1)
        .zip(correction.iter())
        .map(|(p, c)| p + c);
    std::iter::once(array[0]).chain(corrected).collect()
}
