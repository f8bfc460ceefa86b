//! numvec: one-dimensional numeric arrays and the routines built on them.
//!
//! The kernel covers scalar/vector broadcasting arithmetic, reductions,
//! array manipulation, small dense linear algebra (dot, matmul, 2x2
//! inverse, line fitting), piecewise-linear interpolation and sorted
//! search, and signal helpers such as trapezoidal integration and phase
//! unwrapping. Every kernel routine is a pure function returning a new
//! array and reports invalid input through [`VectorError`].
//!
//! Around the kernel sit a whitespace-delimited text loader, a JSON
//! configuration layer and a blocking client for a remote compute service.
pub mod arithmetic;
pub mod broadcast;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod io;
pub mod linalg;
pub mod manipulation;
pub mod math;
pub mod remote;
pub mod signal;
pub mod stats;

pub use broadcast::Operand;
pub use error::{VectorError, VectorResult};
pub use interpolate::Side;
pub use linalg::FitResult;
pub use math::{Array1, Element, Matrix};
