//! Pairwise alignment of leader-ordered cluster-token arrays

pub mod column;
pub mod global;
pub mod traceback;

pub use column::{AlignmentColumn, ColumnKind};
pub use global::global_align;
