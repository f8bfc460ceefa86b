use std::io::Write;
use std::path::Path;

use anyhow::Result;

use numvec::io::write_columns;
use numvec::signal::unwrap;

use super::{load_columns, require_columns};

pub fn run<P: AsRef<Path>, W: Write>(path: P, skip_lines: usize, out: W) -> Result<()> {
    let columns = load_columns(&path, skip_lines)?;
    require_columns(&columns, 1, "unwrap")?;
    write_columns(out, &[unwrap(&columns[0])], b'\t')
}
