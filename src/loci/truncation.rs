//! Scaffold-edge truncation detection

use super::Span;

/// True when the array sits within `margin` bp of either scaffold end,
/// meaning its outermost spacers may have been lost to the contig break
/// rather than to real divergence.
///
/// A negative margin disables detection for the whole run.
pub fn is_edge_truncated(array: Span, scaffold_len: i64, margin: i64) -> bool {
    if margin < 0 {
        return false;
    }
    array.start < margin || scaffold_len - array.end < margin
}
