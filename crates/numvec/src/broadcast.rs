//! Scalar-or-vector operands for elementwise operations.
//!
//! Every arithmetic routine that accepts "a number or an array of numbers"
//! takes an [`Operand`]. A scalar applies to every position; a vector must
//! match the primary array's length exactly.
use crate::error::{VectorError, VectorResult};
use crate::math::Array1;

/// A broadcastable right-hand side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Vector(&'a [f64]),
}

impl<'a> Operand<'a> {
    pub fn is_vector(&self) -> bool {
        matches!(self, Operand::Vector(_))
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand<'_> {
    fn from(value: f32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(value: &'a [f64]) -> Self {
        Operand::Vector(value)
    }
}

impl<'a> From<&'a Vec<f64>> for Operand<'a> {
    fn from(value: &'a Vec<f64>) -> Self {
        Operand::Vector(value.as_slice())
    }
}

impl<'a> From<&'a Array1<f64>> for Operand<'a> {
    fn from(value: &'a Array1<f64>) -> Self {
        Operand::Vector(value.as_slice())
    }
}

/// An operand checked against a primary length.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    operand: Operand<'a>,
}

impl Resolved<'_> {
    /// Value to combine with element `i` of the primary array.
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        match self.operand {
            Operand::Scalar(v) => v,
            Operand::Vector(values) => values[i],
        }
    }
}

/// Check `operand` against `primary_len`.
pub fn resolve(operand: Operand<'_>, primary_len: usize) -> VectorResult<Resolved<'_>> {
    if let Operand::Vector(values) = operand {
        if values.len() != primary_len {
            return Err(VectorError::LengthMismatch {
                expected: primary_len,
                found: values.len(),
            });
        }
    }
    Ok(Resolved { operand })
}

/// Apply `f(array[i], operand[i])` over every position.
pub fn zip_with<'a, F>(
    array: &Array1<f64>,
    operand: impl Into<Operand<'a>>,
    mut f: F,
) -> VectorResult<Array1<f64>>
where
    F: FnMut(f64, f64) -> f64,
{
    let resolved = resolve(operand.into(), array.len())?;
    Ok(array
        .iter()
        .enumerate()
        .map(|(i, &a)| f(a, resolved.get(i)))
        .collect())
}
