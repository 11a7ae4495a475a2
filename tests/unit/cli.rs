//! Compiled-binary runs over fixture tables

use std::fs;
use std::process::Command;

use crispair::report::{POSITIONS_LONG_COLUMNS, POSITIONS_WIDE_COLUMNS, SUMMARY_COLUMNS};

use crate::helpers::{locus_row, spacer_row, write_temp, LOCI_HEADER, SPACER_HEADER};

fn crispair_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_crispair"))
}

#[test]
fn test_order_run_reports_counts_even_when_nothing_excluded() {
    let loci = write_temp(&format!(
        "{}{}{}",
        LOCI_HEADER,
        locus_row("LA", "scaf1", (1000, 1330), Some((900, 990))),
        locus_row("LB", "scaf1", (5000, 5430), Some((4900, 4990)))
    ));
    let spacers = write_temp(&format!(
        "{}{}{}",
        SPACER_HEADER,
        spacer_row("LA", "a1", (1000, 1030), "c1"),
        spacer_row("LB", "b1", (5000, 5030), "c1")
    ));

    let output = crispair_cmd()
        .arg("order")
        .arg("--loci")
        .arg(loci.path())
        .arg("--spacers")
        .arg(spacers.path())
        .output()
        .expect("failed to run crispair");

    assert!(
        output.status.success(),
        "order run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "locus_id\tposition\tspacer_id\tcluster_id\tleader_dist\n\
         LA\t1\ta1\tc1\t10\n\
         LB\t1\tb1\tc1\t10\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("2 loci loaded; 0 without leader coordinates (excluded)"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_acquisition_run_with_single_locus_still_writes_tables() {
    let loci = write_temp(&format!(
        "{}{}",
        LOCI_HEADER,
        locus_row("LA", "scaf1", (1000, 1330), Some((900, 990)))
    ));
    let spacers = write_temp(&format!(
        "{}{}",
        SPACER_HEADER,
        spacer_row("LA", "a1", (1000, 1030), "c1")
    ));
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("run").to_str().unwrap().to_string();

    let output = crispair_cmd()
        .arg("acquisition")
        .arg("--loci")
        .arg(loci.path())
        .arg("--spacers")
        .arg(spacers.path())
        .arg("--margin=-1")
        .arg("--out-prefix")
        .arg(&prefix)
        .output()
        .expect("failed to run crispair");

    assert!(
        output.status.success(),
        "acquisition run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("fewer than two comparable loci"),
        "unexpected stderr: {}",
        stderr
    );

    let summary = fs::read_to_string(format!("{}_summary.tsv", prefix)).unwrap();
    assert_eq!(summary, format!("{}\n", SUMMARY_COLUMNS.join("\t")));
    let wide = fs::read_to_string(format!("{}_positions_wide.tsv", prefix)).unwrap();
    assert_eq!(wide, format!("{}\n", POSITIONS_WIDE_COLUMNS.join("\t")));
    let long = fs::read_to_string(format!("{}_positions_long.tsv", prefix)).unwrap();
    assert_eq!(long, format!("{}\n", POSITIONS_LONG_COLUMNS.join("\t")));
}
