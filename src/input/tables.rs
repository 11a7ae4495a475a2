//! Tab-separated input tables
//!
//! Three tables feed a run: loci, spacers, and scaffold lengths. Each
//! has a header line and is matched by column name, so column order in
//! the file does not matter. Coordinates are 1-based genomic integers
//! and may arrive in either orientation; normalization happens when the
//! store assembles typed records.

use anyhow::{anyhow, bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Raw row of the loci table. Leader coordinates are optional as a
/// pair; the pairing rule is enforced during store assembly.
#[derive(Debug, Clone)]
pub struct LocusRow {
    pub locus_id: String,
    pub scaffold: String,
    pub array_start: i64,
    pub array_end: i64,
    pub leader_start: Option<i64>,
    pub leader_end: Option<i64>,
}

/// Raw row of the spacer table.
#[derive(Debug, Clone)]
pub struct SpacerRow {
    pub locus_id: String,
    pub spacer_id: String,
    pub start: i64,
    pub end: i64,
    pub cluster: String,
}

/// Raw row of the scaffold-length table.
#[derive(Debug, Clone)]
pub struct ScaffoldRow {
    pub scaffold: String,
    pub length: i64,
}

const LOCI_COLUMNS: &[&str] = &[
    "locus_id",
    "scaffold",
    "array_start",
    "array_end",
    "leader_start",
    "leader_end",
];

const SPACER_COLUMNS: &[&str] = &[
    "locus_id",
    "spacer_id",
    "spacer_start",
    "spacer_end",
    "cluster_id",
];

const SCAFFOLD_COLUMNS: &[&str] = &["scaffold", "length"];

pub fn read_loci(path: &Path) -> Result<Vec<LocusRow>> {
    read_table(path, LOCI_COLUMNS, |fields, ctx| {
        Ok(LocusRow {
            locus_id: fields[0].to_string(),
            scaffold: fields[1].to_string(),
            array_start: parse_coord(fields[2], "array_start", ctx)?,
            array_end: parse_coord(fields[3], "array_end", ctx)?,
            leader_start: parse_optional_coord(fields[4], "leader_start", ctx)?,
            leader_end: parse_optional_coord(fields[5], "leader_end", ctx)?,
        })
    })
}

pub fn read_spacers(path: &Path) -> Result<Vec<SpacerRow>> {
    read_table(path, SPACER_COLUMNS, |fields, ctx| {
        Ok(SpacerRow {
            locus_id: fields[0].to_string(),
            spacer_id: fields[1].to_string(),
            start: parse_coord(fields[2], "spacer_start", ctx)?,
            end: parse_coord(fields[3], "spacer_end", ctx)?,
            cluster: fields[4].to_string(),
        })
    })
}

pub fn read_scaffolds(path: &Path) -> Result<Vec<ScaffoldRow>> {
    read_table(path, SCAFFOLD_COLUMNS, |fields, ctx| {
        Ok(ScaffoldRow {
            scaffold: fields[0].to_string(),
            length: parse_coord(fields[1], "length", ctx)?,
        })
    })
}

/// File position carried into parse errors.
#[derive(Clone, Copy)]
pub struct RowContext<'a> {
    pub path: &'a Path,
    pub line_no: usize,
}

/// Read one table: map the header, then hand each row's named fields to
/// the builder in the order the column-name list declares them.
fn read_table<T, F>(path: &Path, columns: &[&str], build: F) -> Result<Vec<T>>
where
    F: Fn(&[&str], RowContext) -> Result<T>,
{
    let file = File::open(path)
        .with_context(|| format!("failed to open table {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line.with_context(|| format!("failed to read {}", path.display()))?,
        None => bail!("{}: empty file, expected a header line", path.display()),
    };
    let indices = header_indices(path, &header, columns)?;

    let mut rows = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = offset + 2;
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

        let mut named = Vec::with_capacity(indices.len());
        for (&idx, name) in indices.iter().zip(columns) {
            let field = fields.get(idx).copied().ok_or_else(|| {
                anyhow!(
                    "{}: line {}: missing field '{}' (row has {} fields)",
                    path.display(),
                    line_no,
                    name,
                    fields.len()
                )
            })?;
            named.push(field);
        }
        rows.push(build(&named, RowContext { path, line_no })?);
    }
    Ok(rows)
}

fn header_indices(path: &Path, header: &str, columns: &[&str]) -> Result<Vec<usize>> {
    let fields: Vec<&str> = header.split('\t').map(str::trim).collect();
    let mut indices = Vec::with_capacity(columns.len());
    for name in columns {
        let idx = fields
            .iter()
            .position(|f| f.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                anyhow!(
                    "{}: header is missing required column '{}' (found: {})",
                    path.display(),
                    name,
                    header.trim()
                )
            })?;
        indices.push(idx);
    }
    Ok(indices)
}

fn parse_coord(value: &str, name: &str, ctx: RowContext) -> Result<i64> {
    value.parse::<i64>().map_err(|_| {
        anyhow!(
            "{}: line {}: {} '{}' is not an integer",
            ctx.path.display(),
            ctx.line_no,
            name,
            value
        )
    })
}

/// Empty fields and `NA` mean "unknown".
fn parse_optional_coord(value: &str, name: &str, ctx: RowContext) -> Result<Option<i64>> {
    if value.is_empty() || value.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    parse_coord(value, name, ctx).map(Some)
}
