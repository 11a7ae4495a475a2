use std::io::{self, Write};

use crate::algorithm::acquisition::PairScore;
use crate::align::ColumnKind;

/// Wide position table column names
pub const POSITIONS_WIDE_COLUMNS: &[&str] = &["locus_i", "locus_j", "aln_len", "scores"];

/// Long position table column names
pub const POSITIONS_LONG_COLUMNS: &[&str] = &[
    "locus_i",
    "locus_j",
    "position",
    "rel_position",
    "score",
    "score_num",
];

/// One row per pair with the full 'm'/'x'/'g' column string.
///
/// The string covers the whole alignment; truncation clamping applies
/// to the summary statistics only.
pub fn write_positions_wide<W: Write>(
    writer: &mut W,
    scores: &[PairScore],
    ids: &[&str],
) -> io::Result<()> {
    writeln!(writer, "{}", POSITIONS_WIDE_COLUMNS.join("\t"))?;
    for score in scores {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            ids[score.left],
            ids[score.right],
            score.columns.len(),
            score.symbol_string()
        )?;
    }
    Ok(())
}

/// One row per (pair, position), with the position also scaled to 0..1
/// so alignments of different lengths can be overlaid.
///
/// `score_num` encodes match as 1, mismatch as 0, gap as NA.
pub fn write_positions_long<W: Write>(
    writer: &mut W,
    scores: &[PairScore],
    ids: &[&str],
) -> io::Result<()> {
    writeln!(writer, "{}", POSITIONS_LONG_COLUMNS.join("\t"))?;
    for score in scores {
        let aln_len = score.columns.len();
        for (idx, col) in score.columns.iter().enumerate() {
            let position = idx + 1;
            // Single-column alignments pin to 0 instead of dividing by zero.
            let rel_position = if aln_len > 1 {
                (position - 1) as f64 / (aln_len - 1) as f64
            } else {
                0.0
            };
            let kind = col.kind();
            let score_num = match kind {
                ColumnKind::Match => "1",
                ColumnKind::Mismatch => "0",
                ColumnKind::Gap => "NA",
            };
            writeln!(
                writer,
                "{}\t{}\t{}\t{:.3}\t{}\t{}",
                ids[score.left],
                ids[score.right],
                position,
                rel_position,
                kind.symbol(),
                score_num
            )?;
        }
    }
    Ok(())
}
