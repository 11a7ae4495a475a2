use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AcquisitionArgs {
    /// Locus table (TSV) with locus, scaffold, array and leader coordinates
    #[arg(short, long)]
    pub loci: PathBuf,
    /// Spacer table (TSV) with per-spacer coordinates and cluster IDs
    #[arg(short, long)]
    pub spacers: PathBuf,
    /// Scaffold length table (TSV); required unless --margin is negative
    #[arg(short = 'f', long)]
    pub scaffolds: Option<PathBuf>,
    /// Prefix for the three output tables (<PREFIX>_summary.tsv,
    /// <PREFIX>_positions_wide.tsv, <PREFIX>_positions_long.tsv).
    /// Without it the summary goes to stdout and the position tables
    /// are skipped.
    #[arg(short, long)]
    pub out_prefix: Option<String>,
    /// Distance from a scaffold edge (bp) within which an array counts
    /// as truncated. Negative disables truncation detection.
    #[arg(long, default_value_t = 500, allow_negative_numbers = true)]
    pub margin: i64,
    /// Keep pairs whose arrays match at position 1 or never match
    #[arg(long, default_value_t = false)]
    pub all: bool,
    /// Comma-separated locus IDs; restricts the comparison to these loci
    #[arg(long)]
    pub loci_filter: Option<String>,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
