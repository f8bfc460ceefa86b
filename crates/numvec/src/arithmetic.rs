//! Elementwise arithmetic with scalar/vector broadcasting.
//!
//! All routines follow plain IEEE 754 double semantics: dividing by zero
//! gives `Inf` or `NaN`, and `NaN` propagates. Length checks happen before
//! any output is produced.
use crate::broadcast::{resolve, zip_with, Operand};
use crate::error::VectorResult;
use crate::math::Array1;

/// `array[i] * factor[i]`.
pub fn multiply<'a>(
    array: &Array1<f64>,
    factor: impl Into<Operand<'a>>,
) -> VectorResult<Array1<f64>> {
    zip_with(array, factor, |a, b| a * b)
}

/// `array[i] + other[i]`.
pub fn add<'a>(array: &Array1<f64>, other: impl Into<Operand<'a>>) -> VectorResult<Array1<f64>> {
    zip_with(array, other, |a, b| a + b)
}

/// `array[i] - other[i]`.
pub fn subtract<'a>(
    array: &Array1<f64>,
    other: impl Into<Operand<'a>>,
) -> VectorResult<Array1<f64>> {
    zip_with(array, other, |a, b| a - b)
}

/// `array[i] / divisor[i]`.
pub fn divide<'a>(
    array: &Array1<f64>,
    divisor: impl Into<Operand<'a>>,
) -> VectorResult<Array1<f64>> {
    zip_with(array, divisor, |a, b| a / b)
}

/// `base[i] ^ exponent[i]`.
pub fn power<'a>(
    base: &Array1<f64>,
    exponent: impl Into<Operand<'a>>,
) -> VectorResult<Array1<f64>> {
    zip_with(base, exponent, f64::powf)
}

/// `base[i] ^ exponent[i]` with the array on the exponent side.
pub fn power_of<'a>(
    base: impl Into<Operand<'a>>,
    exponent: &Array1<f64>,
) -> VectorResult<Array1<f64>> {
    let resolved = resolve(base.into(), exponent.len())?;
    Ok(exponent
        .iter()
        .enumerate()
        .map(|(i, &e)| resolved.get(i).powf(e))
        .collect())
}

/// Truncated remainder (`fmod`): the result takes the sign of the dividend.
pub fn modulo<'a>(
    array: &Array1<f64>,
    divisor: impl Into<Operand<'a>>,
) -> VectorResult<Array1<f64>> {
    zip_with(array, divisor, |a, b| a % b)
}

/// `floor(array[i] / divisor[i])`.
pub fn floor_divide<'a>(
    array: &Array1<f64>,
    divisor: impl Into<Operand<'a>>,
) -> VectorResult<Array1<f64>> {
    zip_with(array, divisor, |a, b| (a / b).floor())
}

pub fn abs(array: &Array1<f64>) -> Array1<f64> {
    array.mapv(|v| v.abs())
}

/// Map `f` over every element.
pub fn apply<F>(array: &Array1<f64>, mut f: F) -> Array1<f64>
where
    F: FnMut(f64) -> f64,
{
    array.mapv(|&v| f(v))
}
