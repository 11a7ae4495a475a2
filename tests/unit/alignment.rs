//! Global token alignment properties

use crispair::align::{global_align, AlignmentColumn, ColumnKind};
use crispair::loci::ClusterId;

fn tokens(ids: &[u32]) -> Vec<ClusterId> {
    ids.iter().map(|&i| ClusterId(i)).collect()
}

fn left_tokens(columns: &[AlignmentColumn]) -> Vec<ClusterId> {
    columns.iter().filter_map(|c| c.left).collect()
}

fn right_tokens(columns: &[AlignmentColumn]) -> Vec<ClusterId> {
    columns.iter().filter_map(|c| c.right).collect()
}

fn symbols(columns: &[AlignmentColumn]) -> String {
    columns.iter().map(|c| c.kind().symbol()).collect()
}

#[test]
fn test_columns_reconstruct_both_inputs() {
    let cases: &[(&[u32], &[u32])] = &[
        (&[1, 2, 3, 4], &[9, 9, 2, 3, 4]),
        (&[1, 2, 3], &[7, 8, 9]),
        (&[5], &[5, 6, 7, 8]),
        (&[1, 2, 2, 3], &[2, 3]),
    ];
    for &(a, b) in cases {
        let left = tokens(a);
        let right = tokens(b);
        let columns = global_align(&left, &right);
        assert_eq!(left_tokens(&columns), left, "left side of {:?} vs {:?}", a, b);
        assert_eq!(
            right_tokens(&columns),
            right,
            "right side of {:?} vs {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_swapped_inputs_preserve_column_multiset() {
    let a = tokens(&[1, 2, 3, 4]);
    let b = tokens(&[9, 9, 2, 3, 4]);

    let forward = global_align(&a, &b);
    let backward = global_align(&b, &a);

    let mut forward_kinds: Vec<char> = symbols(&forward).chars().collect();
    let mut backward_kinds: Vec<char> = symbols(&backward).chars().collect();
    forward_kinds.sort_unstable();
    backward_kinds.sort_unstable();
    assert_eq!(forward_kinds, backward_kinds);

    // Sides swap roles but nothing is lost.
    assert_eq!(left_tokens(&backward), b);
    assert_eq!(right_tokens(&backward), a);
}

#[test]
fn test_match_count_is_maximized() {
    // Shared tail must align as matches even though a lazy diagonal
    // walk would pair 2/3/4 against 9/2/3.
    let a = tokens(&[1, 2, 3, 4]);
    let b = tokens(&[9, 9, 2, 3, 4]);
    let columns = global_align(&a, &b);

    let matches = columns
        .iter()
        .filter(|c| c.kind() == ColumnKind::Match)
        .count();
    assert_eq!(matches, 3);
    assert_eq!(symbols(&columns), "gxmmm");
}

#[test]
fn test_mismatch_preferred_over_gap_pair() {
    // An interior substitution should stay one mismatch column, not
    // split into two gap columns.
    let a = tokens(&[1, 2, 3]);
    let b = tokens(&[1, 9, 3]);
    let columns = global_align(&a, &b);

    assert_eq!(symbols(&columns), "mxm");
}

#[test]
fn test_empty_left_is_fully_gapped() {
    let a = tokens(&[]);
    let b = tokens(&[4, 5]);
    let columns = global_align(&a, &b);

    assert_eq!(columns.len(), 2);
    assert!(columns.iter().all(|c| c.kind() == ColumnKind::Gap));
    assert_eq!(right_tokens(&columns), b);
}

#[test]
fn test_two_empty_inputs_align_to_nothing() {
    let columns = global_align(&[], &[]);
    assert!(columns.is_empty());
}

#[test]
fn test_repeated_cluster_ids_align_positionally() {
    // Duplicate symbols are common in real arrays; the aligner must
    // keep copies in order rather than collapsing them.
    let a = tokens(&[7, 7, 7]);
    let b = tokens(&[7, 7]);
    let columns = global_align(&a, &b);

    assert_eq!(left_tokens(&columns), a);
    assert_eq!(right_tokens(&columns), b);
    let matches = columns
        .iter()
        .filter(|c| c.kind() == ColumnKind::Match)
        .count();
    assert_eq!(matches, 2);
    assert_eq!(columns.len(), 3);
}
