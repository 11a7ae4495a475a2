//! Leader-ordered array dump
//!
//! Small subcommand that loads the locus tables, orders every array
//! leader-outward, and prints one row per element. Useful for checking
//! table wiring and leader coordinates before running a comparison.

pub mod args;

use anyhow::Result;
use std::io::{self, Write};

use crate::input::{parse_locus_filter, LocusStore};
use crate::loci::order_by_leader;
use crate::report;

pub use args::OrderArgs;

pub const ORDER_COLUMNS: &[&str] = &[
    "locus_id",
    "position",
    "spacer_id",
    "cluster_id",
    "leader_dist",
];

/// Write every leader-ordered array, one element per row.
///
/// Loci come out in the store's sorted-id order with 1-based positions.
/// Returns the number of loci excluded for missing leader coordinates.
pub fn write_ordered_arrays<W: Write>(writer: &mut W, store: &LocusStore) -> io::Result<usize> {
    writeln!(writer, "{}", ORDER_COLUMNS.join("\t"))?;

    let mut missing_leader = 0usize;
    for locus in store.loci() {
        let array = match order_by_leader(locus) {
            Some(array) => array,
            None => {
                missing_leader += 1;
                continue;
            }
        };
        for idx in 0..array.len() {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}",
                locus.id,
                idx + 1,
                array.spacer_ids[idx],
                store.clusters().label(array.tokens[idx]),
                array.distances[idx]
            )?;
        }
    }
    Ok(missing_leader)
}

pub fn run(args: OrderArgs) -> Result<()> {
    let filter = args
        .loci_filter
        .as_deref()
        .map(parse_locus_filter)
        .transpose()?;
    let store = LocusStore::load(&args.loci, &args.spacers, None, filter.as_deref())?;

    let mut writer = report::output_writer(args.out.as_deref())?;
    let missing_leader = write_ordered_arrays(&mut writer, &store)?;
    writer.flush()?;

    eprintln!(
        "[INFO] {} loci loaded; {} without leader coordinates (excluded)",
        store.len(),
        missing_leader
    );
    if args.verbose {
        if let Some(path) = &args.out {
            eprintln!("[INFO] wrote {}", path.display());
        }
    }
    Ok(())
}
