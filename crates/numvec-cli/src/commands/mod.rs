//! One module per subcommand. Each `run` writes its output to a caller
//! supplied writer so the binary can hand over stdout.
use std::path::Path;

use anyhow::{bail, Context, Result};

use numvec::config::load_config;
use numvec::io::{loadtxt_with_options, LoadOptions};
use numvec::Array1;

pub mod cumtrapz;
pub mod describe;
pub mod interp;
pub mod polyfit;
pub mod remote;
pub mod unwrap;

/// Loader options from the `loader` section of `config`, with an explicit
/// `skip_lines` taking precedence.
pub fn resolve_load_options(
    config: Option<&Path>,
    skip_lines: Option<usize>,
) -> Result<LoadOptions> {
    let mut options = match config {
        Some(path) => load_config(path)?.loader,
        None => LoadOptions::default(),
    };
    if let Some(skip) = skip_lines {
        options.skip_lines = skip;
    }
    Ok(options)
}

/// Load `path` with one array per column.
pub fn load_columns<P: AsRef<Path>>(path: P, skip_lines: usize) -> Result<Vec<Array1<f64>>> {
    let options = LoadOptions {
        skip_lines,
        unpack: true,
    };
    loadtxt_with_options(&path, &options)
}

/// Fail unless the first `n` columns are present and non-empty.
pub fn require_columns(columns: &[Array1<f64>], n: usize, command: &str) -> Result<()> {
    if columns.len() < n || columns[..n].iter().any(|c| c.is_empty()) {
        bail!(
            "{} needs {} non-empty column(s), input has {}",
            command,
            n,
            columns.iter().filter(|c| !c.is_empty()).count()
        );
    }
    Ok(())
}

/// Parse a comma separated list such as `1,2.5,-3`.
pub fn parse_list(raw: &str) -> Result<Array1<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in list '{}'", s, raw))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from_vec)
}
