//! Tabular output
//!
//! TSV writers for the comparison result set. Each writer is generic
//! over `Write` so tests can render into a `Vec<u8>`; the driver hands
//! them buffered files or stdout.

pub mod positions;
pub mod summary;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub use positions::{
    write_positions_long, write_positions_wide, POSITIONS_LONG_COLUMNS, POSITIONS_WIDE_COLUMNS,
};
pub use summary::{write_summary, SUMMARY_COLUMNS};

/// Buffered writer over a file path, or stdout when no path is given.
pub fn output_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
