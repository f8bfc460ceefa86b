//! Plain delimited text input and output.
pub mod loadtxt;

pub use loadtxt::{loadtxt, loadtxt_with_options, parse_columns, write_columns, LoadOptions};
