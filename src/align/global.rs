//! Global alignment of two cluster-token arrays
//!
//! Needleman-Wunsch over interned cluster ids. Tokens are categorical:
//! the only signal is equality, so there is no substitution matrix. The
//! objective is lexicographic: maximize match columns first, then
//! minimize gap columns. A single combined score realizes that by
//! weighting a match above the worst-case total gap cost, so no amount
//! of gap saving can ever buy back a lost match.
//!
//! Ties between equally scored cells resolve diagonal first, then a gap
//! in the right array, then a gap in the left. The choice is arbitrary
//! but fixed, so identical inputs always produce identical columns.

use super::column::AlignmentColumn;
use super::traceback::{walk, TracebackDir, TracebackMatrix};
use crate::loci::ClusterId;

const GAP_SCORE: i64 = -1;

/// Globally align two token arrays into a full column list.
///
/// Every input token appears in exactly one column in its original
/// order; an empty side comes back fully gapped. The column count is at
/// least `max(left.len(), right.len())`.
pub fn global_align(left: &[ClusterId], right: &[ClusterId]) -> Vec<AlignmentColumn> {
    let rows = left.len() + 1;
    let cols = right.len() + 1;
    // Gap columns never exceed left.len() + right.len(), so this weight
    // makes one extra match beat any gap-count difference.
    let match_score = (left.len() + right.len() + 1) as i64;

    let mut score = vec![0i64; rows * cols];
    let mut trace = TracebackMatrix::new(rows, cols);

    for i in 1..rows {
        score[i * cols] = i as i64 * GAP_SCORE;
        trace.set(i, 0, TracebackDir::Up);
    }
    for j in 1..cols {
        score[j] = j as i64 * GAP_SCORE;
        trace.set(0, j, TracebackDir::Left);
    }

    for i in 1..rows {
        for j in 1..cols {
            let sub = if left[i - 1] == right[j - 1] {
                match_score
            } else {
                0
            };
            let diag = score[(i - 1) * cols + (j - 1)] + sub;
            let up = score[(i - 1) * cols + j] + GAP_SCORE;
            let from_left = score[i * cols + (j - 1)] + GAP_SCORE;

            let (best, dir) = if diag >= up && diag >= from_left {
                (diag, TracebackDir::Diag)
            } else if up >= from_left {
                (up, TracebackDir::Up)
            } else {
                (from_left, TracebackDir::Left)
            };
            score[i * cols + j] = best;
            trace.set(i, j, dir);
        }
    }

    walk(&trace, left, right)
}
