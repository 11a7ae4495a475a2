//! Input tables and the validated locus store
//!
//! Raw TSV rows come in through `tables`, cross-validation and assembly
//! into typed loci happens in `store`. Everything downstream of the
//! store assumes well-formed records.

pub mod store;
pub mod tables;

pub use store::{parse_locus_filter, scaffold_table_for_margin, LocusStore};
