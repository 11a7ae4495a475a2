//! Acquisition comparison
//!
//! This module implements the pairwise acquisition comparison, which
//! aligns every pair of leader-ordered arrays and scores each alignment
//! for evidence of spacer acquisition: where the arrays first converge,
//! how many leader-proximal elements each locus carries alone, and how
//! similar the shared trailer is.

pub mod args;
pub mod driver;
pub mod scoring;

pub use args::AcquisitionArgs;
pub use driver::run;
pub use scoring::{score_pair, PairScore, TruncationStatus};
