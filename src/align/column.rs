//! Alignment column classification

use crate::loci::ClusterId;

/// One position of a pairwise array alignment. At least one side always
/// holds a token; the aligner never emits a gap against a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentColumn {
    pub left: Option<ClusterId>,
    pub right: Option<ClusterId>,
}

impl AlignmentColumn {
    pub fn kind(&self) -> ColumnKind {
        match (self.left, self.right) {
            (Some(l), Some(r)) if l == r => ColumnKind::Match,
            (Some(_), Some(_)) => ColumnKind::Mismatch,
            _ => ColumnKind::Gap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Match,
    Mismatch,
    Gap,
}

impl ColumnKind {
    /// Single-character code used in the position-score tables.
    pub fn symbol(self) -> char {
        match self {
            ColumnKind::Match => 'm',
            ColumnKind::Mismatch => 'x',
            ColumnKind::Gap => 'g',
        }
    }
}
