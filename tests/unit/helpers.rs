//! Test utilities and helpers for unit tests
//!
//! Provides TSV fixture builders and a loaded-store constructor so the
//! area tests can go from table text to scored pairs without repeating
//! boilerplate.

use std::io::Write;
use tempfile::NamedTempFile;

use crispair::input::LocusStore;

/// Write `content` to a fresh temp file and return its handle.
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Build a loci-table row.
pub fn locus_row(
    id: &str,
    scaffold: &str,
    array: (i64, i64),
    leader: Option<(i64, i64)>,
) -> String {
    match leader {
        Some((start, end)) => format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            id, scaffold, array.0, array.1, start, end
        ),
        None => format!("{}\t{}\t{}\t{}\tNA\tNA\n", id, scaffold, array.0, array.1),
    }
}

/// Build a spacer-table row.
pub fn spacer_row(locus: &str, id: &str, span: (i64, i64), cluster: &str) -> String {
    format!("{}\t{}\t{}\t{}\t{}\n", locus, id, span.0, span.1, cluster)
}

pub const LOCI_HEADER: &str =
    "locus_id\tscaffold\tarray_start\tarray_end\tleader_start\tleader_end\n";
pub const SPACER_HEADER: &str = "locus_id\tspacer_id\tspacer_start\tspacer_end\tcluster_id\n";
pub const SCAFFOLD_HEADER: &str = "scaffold\tlength\n";

/// Load a store from table text. `scaffolds` text is optional to mirror
/// the negative-margin path.
pub fn load_store(loci: &str, spacers: &str, scaffolds: Option<&str>) -> LocusStore {
    let loci_file = write_temp(loci);
    let spacer_file = write_temp(spacers);
    match scaffolds {
        Some(text) => {
            let scaffold_file = write_temp(text);
            LocusStore::load(
                loci_file.path(),
                spacer_file.path(),
                Some(scaffold_file.path()),
                None,
            )
            .unwrap()
        }
        None => LocusStore::load(loci_file.path(), spacer_file.path(), None, None).unwrap(),
    }
}

/// Assert that two floating point values are approximately equal
pub fn assert_approx_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Values not approximately equal: {} vs {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
