use std::io::Write;
use std::path::Path;

use anyhow::Result;

use numvec::interpolate::interp;
use numvec::io::write_columns;
use numvec::Array1;

use super::{load_columns, require_columns};

/// Interpolate the first column of `path` over `(xp, fp)`; prints `x\ty`.
pub fn run<P: AsRef<Path>, W: Write>(
    path: P,
    skip_lines: usize,
    xp: &Array1<f64>,
    fp: &Array1<f64>,
    out: W,
) -> Result<()> {
    let columns = load_columns(&path, skip_lines)?;
    require_columns(&columns, 1, "interp")?;
    let x = &columns[0];
    let y = interp(x, xp, fp)?;
    write_columns(out, &[x.clone(), y], b'\t')
}
