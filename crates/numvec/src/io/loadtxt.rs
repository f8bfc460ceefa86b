//! Whitespace-delimited text reader and writer.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::Array1;

/// How a text file is turned into arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Number of leading lines to ignore.
    pub skip_lines: usize,
    /// One array per column instead of a single flat array.
    pub unpack: bool,
}

/// Read numbers from a whitespace/tab-delimited text file.
///
/// Without `unpack` the result holds a single array with every value in
/// reading order. With `unpack` the j-th field of each line goes to
/// column j; lines may have different field counts, so columns may differ
/// in length.
pub fn loadtxt<P: AsRef<Path>>(
    path: P,
    skip_lines: usize,
    unpack: bool,
) -> Result<Vec<Array1<f64>>> {
    loadtxt_with_options(path, &LoadOptions { skip_lines, unpack })
}

/// Read numbers from a text file using explicit [`LoadOptions`].
pub fn loadtxt_with_options<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<Vec<Array1<f64>>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read text file: {}", path.as_ref().display()))?;
    parse_columns(&content, options)
        .with_context(|| format!("Failed to parse text file: {}", path.as_ref().display()))
}

/// Parse already-loaded text. See [`loadtxt`].
pub fn parse_columns(content: &str, options: &LoadOptions) -> Result<Vec<Array1<f64>>> {
    // Collapse every whitespace run to one space so csv sees a single
    // delimiter between fields. Remember source line numbers for errors.
    let mut normalized = String::with_capacity(content.len());
    let mut line_numbers = Vec::new();
    for (idx, line) in content.lines().enumerate().skip(options.skip_lines) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        normalized.push_str(&fields.join(" "));
        normalized.push('\n');
        line_numbers.push(idx + 1);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(normalized.as_bytes());

    let mut columns: Vec<Vec<f64>> = vec![Vec::new()];
    for (row_idx, result) in reader.records().enumerate() {
        let line_no = line_numbers.get(row_idx).copied().unwrap_or(row_idx + 1);
        let record = result.with_context(|| format!("Failed to read line {}", line_no))?;
        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().with_context(|| {
                format!(
                    "Invalid number '{}' at line {}, column {}",
                    field,
                    line_no,
                    col_idx + 1
                )
            })?;
            if options.unpack {
                if columns.len() <= col_idx {
                    columns.push(Vec::new());
                }
                columns[col_idx].push(value);
            } else {
                columns[0].push(value);
            }
        }
    }

    log::trace!(
        "parsed {} data lines into {} column(s)",
        line_numbers.len(),
        columns.len()
    );
    Ok(columns.into_iter().map(Array1::from_vec).collect())
}

/// Write columns side by side, one row per line.
///
/// Columns shorter than the longest one leave their trailing cells empty.
pub fn write_columns<W: Write>(writer: W, columns: &[Array1<f64>], delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);
    let nrows = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    for row in 0..nrows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| c.as_slice().get(row).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        wtr.write_record(&cells)
            .with_context(|| format!("Failed to write row {}", row + 1))?;
    }
    wtr.flush().context("Failed to flush output")?;
    Ok(())
}
