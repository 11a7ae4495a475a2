//! Leader-relative ordering and truncation detection

use crispair::loci::{is_edge_truncated, order_by_leader, ArrayElement, ClusterId, Locus, Span};

use crate::helpers::{load_store, locus_row, spacer_row, LOCI_HEADER, SPACER_HEADER};

fn make_locus(leader: Option<(i64, i64)>, elements: &[(i64, i64)]) -> Locus {
    Locus {
        id: "L1".to_string(),
        scaffold: "scaf1".to_string(),
        array: Span::normalized(
            elements.iter().map(|e| e.0.min(e.1)).min().unwrap_or(1),
            elements.iter().map(|e| e.0.max(e.1)).max().unwrap_or(1),
        ),
        leader: leader.map(|(a, b)| Span::normalized(a, b)),
        elements: elements
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| ArrayElement {
                id: format!("s{}", i + 1),
                span: Span::normalized(a, b),
                cluster: ClusterId(i as u32),
            })
            .collect(),
    }
}

#[test]
fn test_ordered_distances_non_decreasing() {
    // Elements deliberately listed out of coordinate order.
    let locus = make_locus(
        Some((900, 990)),
        &[(1200, 1230), (1000, 1030), (1100, 1130)],
    );
    let array = order_by_leader(&locus).unwrap();

    assert_eq!(array.len(), 3);
    for pair in array.distances.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    assert_eq!(array.spacer_ids, vec!["s2", "s3", "s1"]);
}

#[test]
fn test_reversed_input_coordinates_do_not_change_order() {
    // Same locus twice, once with every coordinate pair flipped. Load
    // normalizes to the + strand, so ordering must be identical.
    let forward_loci = format!(
        "{}{}",
        LOCI_HEADER,
        locus_row("L1", "scaf1", (1000, 1330), Some((900, 990)))
    );
    let flipped_loci = format!(
        "{}{}",
        LOCI_HEADER,
        locus_row("L1", "scaf1", (1330, 1000), Some((990, 900)))
    );
    let forward_spacers = format!(
        "{}{}{}",
        SPACER_HEADER,
        spacer_row("L1", "s1", (1000, 1030), "c1"),
        spacer_row("L1", "s2", (1100, 1130), "c2")
    );
    let flipped_spacers = format!(
        "{}{}{}",
        SPACER_HEADER,
        spacer_row("L1", "s1", (1030, 1000), "c1"),
        spacer_row("L1", "s2", (1130, 1100), "c2")
    );

    let forward = load_store(&forward_loci, &forward_spacers, None);
    let flipped = load_store(&flipped_loci, &flipped_spacers, None);

    let array_forward = order_by_leader(forward.get("L1").unwrap()).unwrap();
    let array_flipped = order_by_leader(flipped.get("L1").unwrap()).unwrap();

    assert_eq!(array_forward.tokens, array_flipped.tokens);
    assert_eq!(array_forward.distances, array_flipped.distances);
    assert_eq!(array_forward.spacer_ids, array_flipped.spacer_ids);
}

#[test]
fn test_downstream_leader_reverses_coordinate_order() {
    // Leader sits past the array end, so the element closest to it is
    // the one with the largest coordinates.
    let locus = make_locus(
        Some((1400, 1500)),
        &[(1000, 1030), (1100, 1130), (1200, 1230)],
    );
    let array = order_by_leader(&locus).unwrap();

    assert_eq!(array.spacer_ids, vec!["s3", "s2", "s1"]);
}

#[test]
fn test_leaderless_locus_yields_no_array() {
    let locus = make_locus(None, &[(1000, 1030)]);
    assert!(order_by_leader(&locus).is_none());
}

#[test]
fn test_truncation_near_scaffold_start() {
    let array = Span {
        start: 10,
        end: 990,
    };
    assert!(is_edge_truncated(array, 1000, 500));
}

#[test]
fn test_truncation_interior_array() {
    let array = Span {
        start: 600,
        end: 700,
    };
    assert!(!is_edge_truncated(array, 2000, 500));
}

#[test]
fn test_negative_margin_disables_truncation() {
    let array = Span {
        start: 10,
        end: 990,
    };
    assert!(!is_edge_truncated(array, 1000, -1));
}
