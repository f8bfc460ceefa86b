//! numvec-cli: subcommand implementations behind the `numvec` binary.
pub mod commands;
