use std::error::Error;
use std::fmt;

/// Result type for kernel operations.
pub type VectorResult<T> = Result<T, VectorError>;

/// Input-validation failures raised by the array kernel.
///
/// Numeric edge cases (division by zero, singular matrices) are not errors;
/// they propagate as IEEE `Inf`/`NaN`.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Operand lengths disagree.
    LengthMismatch { expected: usize, found: usize },
    /// Matrix shapes are incompatible, or a matrix is not rectangular.
    DimensionMismatch { context: String },
    /// Index outside the valid range `0..len`.
    IndexOutOfRange { index: usize, len: usize },
    /// Matrix inverse requested for anything other than 2x2.
    UnsupportedShape { rows: usize, cols: usize },
    /// Sample positions are not strictly increasing.
    UnsortedInput,
    /// Operation needs at least one element.
    EmptyInput { context: String },
    /// Operation needs more elements than were supplied.
    InsufficientData { required: usize, found: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::LengthMismatch { expected, found } => write!(
                f,
                "arrays must be of the same length (expected {}, found {})",
                expected, found
            ),
            VectorError::DimensionMismatch { context } => {
                write!(f, "dimension mismatch: {}", context)
            }
            VectorError::IndexOutOfRange { index, len } => write!(
                f,
                "index {} is out of range for array of length {}",
                index, len
            ),
            VectorError::UnsupportedShape { rows, cols } => write!(
                f,
                "unsupported shape ({}, {}): only 2x2 matrices are supported",
                rows, cols
            ),
            VectorError::UnsortedInput => write!(f, "input must be strictly increasing"),
            VectorError::EmptyInput { context } => {
                write!(f, "{} requires a non-empty array", context)
            }
            VectorError::InsufficientData { required, found } => write!(
                f,
                "input data too small: need at least {} samples, found {}",
                required, found
            ),
        }
    }
}

impl Error for VectorError {}
