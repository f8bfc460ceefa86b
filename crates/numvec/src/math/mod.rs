//! Container types used throughout the crate.
//!
//! `Array1` is the one-dimensional numeric array every kernel operation
//! consumes and produces; `Matrix` is a sequence of `Array1` rows.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::{Array1, Element};
