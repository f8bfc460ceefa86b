//! Per-column summary statistics.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use numvec::io::{loadtxt_with_options, LoadOptions};
use numvec::signal::norm;
use numvec::stats::{max, mean, min, sum};
use numvec::Array1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: usize,
    pub len: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub min_index: usize,
    pub max: f64,
    pub max_index: usize,
    pub norm: f64,
}

/// Summaries for every non-empty column.
pub fn summarize(columns: &[Array1<f64>]) -> Result<Vec<ColumnSummary>> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_empty())
        .map(|(idx, c)| -> Result<ColumnSummary> {
            let (min_value, min_index) = min(c)?;
            let (max_value, max_index) = max(c)?;
            Ok(ColumnSummary {
                column: idx,
                len: c.len(),
                sum: sum(c),
                mean: mean(c),
                min: min_value,
                min_index,
                max: max_value,
                max_index,
                norm: norm(c),
            })
        })
        .collect()
}

pub fn run<P: AsRef<Path>, W: Write>(
    path: P,
    options: &LoadOptions,
    json: bool,
    mut out: W,
) -> Result<()> {
    let columns = loadtxt_with_options(&path, options)?;
    let summaries = summarize(&columns)?;
    log::info!(
        "Summarized {} column(s) from {}",
        summaries.len(),
        path.as_ref().display()
    );

    if json {
        serde_json::to_writer_pretty(&mut out, &summaries).context("Failed to write summary")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "column\tlen\tsum\tmean\tmin\tmin_index\tmax\tmax_index\tnorm"
    )?;
    for s in &summaries {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.column, s.len, s.sum, s.mean, s.min, s.min_index, s.max, s.max_index, s.norm
        )?;
    }
    Ok(())
}
