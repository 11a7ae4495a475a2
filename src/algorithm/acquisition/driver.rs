//! Pairwise comparison driver
//!
//! Admits every locus with a leader-ordered array, assigns dense
//! indices in sorted-id order, and walks the lower triangle of the
//! locus x locus grid: align, score, keep or skip. Pairs are
//! independent, so the loop is a rayon map over a prebuilt pair list;
//! the only cross-pair state is the skip counter.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use super::args::AcquisitionArgs;
use super::scoring::{score_pair, PairScore};
use crate::align::global_align;
use crate::input::{parse_locus_filter, scaffold_table_for_margin, LocusStore};
use crate::loci::{is_edge_truncated, order_by_leader, OrderedArray};
use crate::report;

/// One locus admitted to the comparison, at its dense index.
pub struct EligibleLocus {
    pub id: String,
    pub array: OrderedArray,
    pub truncated: bool,
}

/// Run counters reported on stderr once the comparison finishes.
///
/// `missing_leader` makes the leaderless exclusions observable so they
/// are not mistaken for data loss.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub loci_loaded: usize,
    pub missing_leader: usize,
    pub eligible: usize,
    pub pairs_total: usize,
    pub pairs_skipped: usize,
    pub pairs_scored: usize,
}

impl RunSummary {
    pub fn print(&self) {
        eprintln!(
            "[INFO] {} loci loaded; {} without leader coordinates (excluded); {} eligible",
            self.loci_loaded, self.missing_leader, self.eligible
        );
        eprintln!(
            "[INFO] {} pairs compared; {} skipped (arrays never diverge); {} scored",
            self.pairs_total, self.pairs_skipped, self.pairs_scored
        );
    }
}

/// Build the eligible-locus list from a loaded store.
///
/// Loci come back in the store's sorted-id order, which fixes the dense
/// index each locus is known by for the rest of the run. Returns the
/// list and the count of loci excluded for missing leaders.
pub fn eligible_loci(store: &LocusStore, margin: i64) -> Result<(Vec<EligibleLocus>, usize)> {
    let mut eligible = Vec::new();
    let mut missing_leader = 0usize;

    for locus in store.loci() {
        let array = match order_by_leader(locus) {
            Some(array) => array,
            None => {
                missing_leader += 1;
                continue;
            }
        };
        let truncated = if margin < 0 {
            false
        } else {
            let scaffold_len = store.scaffold_length(&locus.scaffold).with_context(|| {
                format!(
                    "no scaffold length for '{}' (locus '{}')",
                    locus.scaffold, locus.id
                )
            })?;
            is_edge_truncated(locus.array, scaffold_len, margin)
        };
        eligible.push(EligibleLocus {
            id: locus.id.clone(),
            array,
            truncated,
        });
    }

    Ok((eligible, missing_leader))
}

/// Align and score every unordered pair of eligible loci.
///
/// A pair whose arrays first match at position 1 (or never match) holds
/// no acquisition signal and is dropped unless `keep_all` is set; the
/// drop count comes back with the scores. Each pair is a pure function
/// of its two arrays and flags, so the map runs on the rayon pool with
/// no ordering between pairs; the result keeps lower-triangle (i, j)
/// order regardless of thread count.
pub fn compare_all(
    eligible: &[EligibleLocus],
    keep_all: bool,
    progress: Option<&ProgressBar>,
) -> (Vec<PairScore>, usize) {
    let mut pairs = Vec::new();
    for i in 0..eligible.len() {
        for j in i + 1..eligible.len() {
            pairs.push((i, j));
        }
    }

    let skipped = AtomicUsize::new(0);
    let scores: Vec<PairScore> = pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            let left = &eligible[i];
            let right = &eligible[j];
            let columns = global_align(&left.array.tokens, &right.array.tokens);
            let pair = score_pair(
                i,
                j,
                columns,
                left.array.len(),
                right.array.len(),
                left.truncated,
                right.truncated,
            );
            if let Some(bar) = progress {
                bar.inc(1);
            }
            if pair.first_match <= 1 && !keep_all {
                skipped.fetch_add(1, AtomicOrdering::Relaxed);
                return None;
            }
            Some(pair)
        })
        .collect();

    (scores, skipped.load(AtomicOrdering::Relaxed))
}

pub fn run(args: AcquisitionArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("Failed to build thread pool")?;

    let filter = args
        .loci_filter
        .as_deref()
        .map(parse_locus_filter)
        .transpose()?;
    let scaffolds = scaffold_table_for_margin(args.scaffolds.as_deref(), args.margin)?;
    let store = LocusStore::load(&args.loci, &args.spacers, scaffolds, filter.as_deref())?;

    let (eligible, missing_leader) = eligible_loci(&store, args.margin)?;
    if eligible.len() < 2 {
        eprintln!(
            "[INFO] {} loci loaded; {} without leader coordinates (excluded); \
             fewer than two comparable loci, nothing to compare",
            store.len(),
            missing_leader
        );
        // Requested tables still get written, header-only.
        let ids: Vec<&str> = eligible.iter().map(|l| l.id.as_str()).collect();
        return write_reports(&args, &[], &ids);
    }

    let pairs_total = eligible.len() * (eligible.len() - 1) / 2;
    if args.verbose {
        eprintln!(
            "[INFO] comparing {} locus pairs on {} threads (margin {})",
            pairs_total, num_threads, args.margin
        );
    }

    let bar = ProgressBar::new(pairs_total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );

    let (scores, pairs_skipped) = compare_all(&eligible, args.all, Some(&bar));
    bar.finish();

    let summary = RunSummary {
        loci_loaded: store.len(),
        missing_leader,
        eligible: eligible.len(),
        pairs_total,
        pairs_skipped,
        pairs_scored: scores.len(),
    };
    summary.print();

    let ids: Vec<&str> = eligible.iter().map(|l| l.id.as_str()).collect();
    write_reports(&args, &scores, &ids)?;
    Ok(())
}

/// Route the result set to its tables.
///
/// With an output prefix all three tables are written; without one the
/// summary goes to stdout and the per-position tables are skipped,
/// noted on stderr so the omission is visible.
fn write_reports(args: &AcquisitionArgs, scores: &[PairScore], ids: &[&str]) -> Result<()> {
    match &args.out_prefix {
        Some(prefix) => {
            let summary_path = format!("{}_summary.tsv", prefix);
            let wide_path = format!("{}_positions_wide.tsv", prefix);
            let long_path = format!("{}_positions_long.tsv", prefix);

            let mut writer = table_writer(&summary_path)?;
            report::write_summary(&mut writer, scores, ids)?;
            writer.flush()?;

            let mut writer = table_writer(&wide_path)?;
            report::write_positions_wide(&mut writer, scores, ids)?;
            writer.flush()?;

            let mut writer = table_writer(&long_path)?;
            report::write_positions_long(&mut writer, scores, ids)?;
            writer.flush()?;

            if args.verbose {
                eprintln!(
                    "[INFO] wrote {}, {}, {}",
                    summary_path, wide_path, long_path
                );
            }
        }
        None => {
            let mut writer = report::output_writer(None)?;
            report::write_summary(&mut writer, scores, ids)?;
            writer.flush()?;
            eprintln!("[INFO] no output prefix given; position-score tables skipped");
        }
    }
    Ok(())
}

fn table_writer(path: &str) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
    Ok(BufWriter::new(file))
}
