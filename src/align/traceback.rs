//! Traceback storage for the global aligner

use super::column::AlignmentColumn;
use crate::loci::ClusterId;

/// Direction taken to reach a DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackDir {
    /// Diagonal: both sides consume a token.
    Diag,
    /// Up: the left array consumes a token, the right side gaps.
    Up,
    /// Left: the right array consumes a token, the left side gaps.
    Left,
    /// Origin cell.
    Stop,
}

/// Flat row-major traceback matrix, rows indexed by left-array prefix
/// length and columns by right-array prefix length.
pub struct TracebackMatrix {
    data: Vec<TracebackDir>,
    cols: usize,
}

impl TracebackMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![TracebackDir::Stop; rows * cols],
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> TracebackDir {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, dir: TracebackDir) {
        self.data[row * self.cols + col] = dir;
    }
}

/// Walk the traceback from the terminal cell and rebuild the column
/// list in forward order.
pub fn walk(
    matrix: &TracebackMatrix,
    left: &[ClusterId],
    right: &[ClusterId],
) -> Vec<AlignmentColumn> {
    let mut columns = Vec::with_capacity(left.len().max(right.len()));
    let mut row = left.len();
    let mut col = right.len();

    while row > 0 || col > 0 {
        match matrix.get(row, col) {
            TracebackDir::Diag => {
                columns.push(AlignmentColumn {
                    left: Some(left[row - 1]),
                    right: Some(right[col - 1]),
                });
                row -= 1;
                col -= 1;
            }
            TracebackDir::Up => {
                columns.push(AlignmentColumn {
                    left: Some(left[row - 1]),
                    right: None,
                });
                row -= 1;
            }
            TracebackDir::Left => {
                columns.push(AlignmentColumn {
                    left: None,
                    right: Some(right[col - 1]),
                });
                col -= 1;
            }
            TracebackDir::Stop => break,
        }
    }

    columns.reverse();
    columns
}
