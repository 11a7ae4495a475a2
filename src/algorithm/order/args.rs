use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Locus table (TSV) with locus, scaffold, array and leader coordinates
    #[arg(short, long)]
    pub loci: PathBuf,
    /// Spacer table (TSV) with per-spacer coordinates and cluster IDs
    #[arg(short, long)]
    pub spacers: PathBuf,
    /// Comma-separated locus IDs; restricts the dump to these loci
    #[arg(long)]
    pub loci_filter: Option<String>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
