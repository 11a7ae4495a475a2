//! Scoring of one aligned locus pair
//!
//! Consumes the column list from the aligner plus the two truncation
//! flags and derives the acquisition statistics: where the arrays first
//! converge, how many leading elements each side carries before that
//! point (the possible new spacers), and identity over the shared
//! region. Columns are counted with a 1-based position so the reported
//! numbers read as array positions.

use crate::align::{AlignmentColumn, ColumnKind};

/// Which sides of a pair are flagged as assembly-truncated.
///
/// Truncation trims the comparison window: columns past the truncated
/// side's last token are assembly artifacts, not divergence, so they
/// must not count against identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationStatus {
    Neither,
    LeftOnly,
    RightOnly,
    Both,
}

impl TruncationStatus {
    pub fn from_flags(left: bool, right: bool) -> Self {
        match (left, right) {
            (false, false) => TruncationStatus::Neither,
            (true, false) => TruncationStatus::LeftOnly,
            (false, true) => TruncationStatus::RightOnly,
            (true, true) => TruncationStatus::Both,
        }
    }

    pub fn any(self) -> bool {
        self != TruncationStatus::Neither
    }

    /// Upper bound of the comparison window (1-based).
    ///
    /// A truncated side stops counting at its own last token; with both
    /// sides truncated the shorter one bounds the window.
    fn window_end(self, full_len: usize, last_left: usize, last_right: usize) -> usize {
        match self {
            TruncationStatus::Neither => full_len,
            TruncationStatus::LeftOnly => last_left,
            TruncationStatus::RightOnly => last_right,
            TruncationStatus::Both => last_left.min(last_right),
        }
    }
}

/// Scored comparison of one locus pair.
///
/// `left`/`right` are dense indices into the run's eligible-locus list.
/// Positions (`first_match`, `last_match`, `aln_len_total`) are 1-based
/// column positions; 0 means "never" for the match positions. The
/// match/mismatch/gap counts cover only the comparison window
/// `[first_match, aln_len_total]`; `columns` keeps the whole alignment
/// for the per-position reports. Immutable once built.
#[derive(Debug, Clone)]
pub struct PairScore {
    pub left: usize,
    pub right: usize,
    pub columns: Vec<AlignmentColumn>,
    pub first_match: usize,
    pub last_match: usize,
    pub elements_left: usize,
    pub elements_right: usize,
    pub new_spacers_left: usize,
    pub new_spacers_right: usize,
    pub truncated_left: bool,
    pub truncated_right: bool,
    pub truncation: TruncationStatus,
    pub aln_len_total: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
    pub percent_id: Option<f64>,
    pub concordant: usize,
}

impl PairScore {
    /// The alignment as its 'm'/'x'/'g' column string (full length,
    /// never truncation-clamped).
    pub fn symbol_string(&self) -> String {
        self.columns.iter().map(|c| c.kind().symbol()).collect()
    }
}

/// Score an aligned pair.
///
/// One walk over the columns finds the first and last match positions,
/// counts per-side tokens in the pre-convergence prefix (possible new
/// spacers), and tracks each side's last token position. Truncation
/// then clamps the window end, and the window `[first_match,
/// aln_len_total]` yields the match/mismatch/gap counts, percent
/// identity, and the concordant run.
///
/// When the arrays never share a token (`first_match == 0`) there is no
/// window: the counts stay zero and `percent_id` is `None` rather than
/// a division by an empty window.
pub fn score_pair(
    left: usize,
    right: usize,
    columns: Vec<AlignmentColumn>,
    elements_left: usize,
    elements_right: usize,
    truncated_left: bool,
    truncated_right: bool,
) -> PairScore {
    let truncation = TruncationStatus::from_flags(truncated_left, truncated_right);

    let mut first_match = 0usize;
    let mut last_match = 0usize;
    let mut new_spacers_left = 0usize;
    let mut new_spacers_right = 0usize;
    let mut last_spacer_left = 0usize;
    let mut last_spacer_right = 0usize;

    for (idx, col) in columns.iter().enumerate() {
        let pos = idx + 1;
        if col.left.is_some() {
            last_spacer_left = pos;
        }
        if col.right.is_some() {
            last_spacer_right = pos;
        }
        if col.kind() == ColumnKind::Match {
            if first_match == 0 {
                first_match = pos;
            }
            last_match = pos;
        }
        if first_match == 0 {
            if col.left.is_some() {
                new_spacers_left += 1;
            }
            if col.right.is_some() {
                new_spacers_right += 1;
            }
        }
    }

    let aln_len_total = truncation.window_end(columns.len(), last_spacer_left, last_spacer_right);

    let mut matches = 0usize;
    let mut mismatches = 0usize;
    let mut gaps = 0usize;
    let mut concordant = 0usize;
    let mut percent_id = None;

    // A match column holds tokens on both sides, so whenever a match
    // exists the clamped end is >= first_match and the window is
    // non-empty.
    if first_match >= 1 && aln_len_total >= first_match {
        for col in &columns[first_match - 1..aln_len_total] {
            match col.kind() {
                ColumnKind::Match => matches += 1,
                ColumnKind::Mismatch => mismatches += 1,
                ColumnKind::Gap => gaps += 1,
            }
        }
        for col in &columns[first_match - 1..aln_len_total] {
            if col.kind() == ColumnKind::Match {
                concordant += 1;
            } else {
                break;
            }
        }
        let window_len = aln_len_total - first_match + 1;
        percent_id = Some((window_len - (mismatches + gaps)) as f64 / window_len as f64 * 100.0);
    }

    PairScore {
        left,
        right,
        columns,
        first_match,
        last_match,
        elements_left,
        elements_right,
        new_spacers_left,
        new_spacers_right,
        truncated_left,
        truncated_right,
        truncation,
        aln_len_total,
        matches,
        mismatches,
        gaps,
        percent_id,
        concordant,
    }
}
