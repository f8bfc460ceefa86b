use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use numvec::linalg::polyfit;

use super::{load_columns, require_columns};

/// Fit `y = slope * x + intercept` to columns 0 and 1.
pub fn run<P: AsRef<Path>, W: Write>(
    path: P,
    skip_lines: usize,
    json: bool,
    mut out: W,
) -> Result<()> {
    let columns = load_columns(&path, skip_lines)?;
    require_columns(&columns, 2, "polyfit")?;
    let fit = polyfit(&columns[0], &columns[1])?;
    if json {
        serde_json::to_writer(&mut out, &fit).context("Failed to write fit")?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "slope\tintercept")?;
    writeln!(out, "{}\t{}", fit.slope, fit.intercept)?;
    Ok(())
}
