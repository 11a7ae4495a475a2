use std::cmp::Ordering;
use std::io::{self, Write};

use crate::algorithm::acquisition::PairScore;

/// Summary table column names
pub const SUMMARY_COLUMNS: &[&str] = &[
    "locus_i",                // Left locus ID
    "locus_j",                // Right locus ID
    "aln_len_total",          // Alignment length, truncation-clamped
    "first_match",            // 1-based position of the first match (0 = none)
    "concord_matches",        // Match run length from first_match
    "matches",                // Match columns in the comparison window
    "mismatches",             // Mismatch columns in the comparison window
    "gaps",                   // Gap columns in the comparison window
    "percent_id",             // Identity over the window; NA when no window
    "truncation",             // 1 if either side is truncated
    "truncation_i",           // 1 if the left locus is truncated
    "truncation_j",           // 1 if the right locus is truncated
    "possible_new_spacers_i", // Left tokens before the arrays converge
    "possible_new_spacers_j", // Right tokens before the arrays converge
];

/// Write the per-pair summary table.
///
/// Rows come out sorted descending by percent identity with NA rows
/// last; ties fall back to the (locus_i, locus_j) ID pair so the output
/// is stable across thread counts.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scores: &[PairScore],
    ids: &[&str],
) -> io::Result<()> {
    writeln!(writer, "{}", SUMMARY_COLUMNS.join("\t"))?;

    let mut rows: Vec<&PairScore> = scores.iter().collect();
    rows.sort_by(|a, b| {
        let key_a = (ids[a.left], ids[a.right]);
        let key_b = (ids[b.left], ids[b.right]);
        match (a.percent_id, b.percent_id) {
            (Some(x), Some(y)) => y
                .partial_cmp(&x)
                .unwrap_or(Ordering::Equal)
                .then_with(|| key_a.cmp(&key_b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => key_a.cmp(&key_b),
        }
    });

    for score in rows {
        write!(writer, "{}\t{}", ids[score.left], ids[score.right])?;
        write!(
            writer,
            "\t{}\t{}\t{}",
            score.aln_len_total, score.first_match, score.concordant
        )?;
        write!(
            writer,
            "\t{}\t{}\t{}",
            score.matches, score.mismatches, score.gaps
        )?;
        match score.percent_id {
            Some(percent) => write!(writer, "\t{:.2}", percent)?,
            None => write!(writer, "\tNA")?,
        }
        write!(
            writer,
            "\t{}\t{}\t{}",
            score.truncation.any() as u8,
            score.truncated_left as u8,
            score.truncated_right as u8
        )?;
        writeln!(
            writer,
            "\t{}\t{}",
            score.new_spacers_left, score.new_spacers_right
        )?;
    }
    Ok(())
}
