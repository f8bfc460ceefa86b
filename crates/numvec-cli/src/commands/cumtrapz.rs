use std::io::Write;
use std::path::Path;

use anyhow::Result;

use numvec::io::write_columns;
use numvec::signal::cumtrapz;
use numvec::Array1;

use super::{load_columns, require_columns};

/// Integrate column 1 over column 0; each row is the upper bound and the
/// running integral up to it.
pub fn run<P: AsRef<Path>, W: Write>(path: P, skip_lines: usize, out: W) -> Result<()> {
    let columns = load_columns(&path, skip_lines)?;
    require_columns(&columns, 2, "cumtrapz")?;
    let integral = cumtrapz(&columns[0], &columns[1])?;
    let upper: Array1<f64> = columns[0].iter().skip(1).copied().collect();
    write_columns(out, &[upper, integral], b'\t')
}
