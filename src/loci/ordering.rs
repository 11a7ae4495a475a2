//! Leader-relative ordering of array elements
//!
//! The leader flanks one end of the array, and spacers are acquired at
//! the leader-proximal end, so distance from the leader is the
//! acquisition timeline: position 1 is the youngest element. Ordering is
//! what makes two arrays comparable at all.

use super::{Locus, OrderedArray, Span};

/// Distance from the leader to an element, both spans normalized.
///
/// Downstream elements measure from the leader end, upstream elements
/// from the leader start, so the magnitude grows with separation on
/// either side and an element overlapping the leader goes negative.
fn leader_distance(leader: Span, elem: Span) -> i64 {
    if leader.end <= elem.start {
        elem.start - leader.end
    } else {
        leader.start - elem.end
    }
}

/// Order a locus's elements by ascending distance from its leader.
///
/// Returns `None` when the locus has no leader annotation. That is a
/// filtering condition, not an error: without a leader there is no
/// reference point, and inventing one would silently corrupt every
/// comparison the locus takes part in.
///
/// Ties keep the input order of the elements.
pub fn order_by_leader(locus: &Locus) -> Option<OrderedArray> {
    let leader = locus.leader?;

    let mut indexed: Vec<(i64, usize)> = locus
        .elements
        .iter()
        .enumerate()
        .map(|(i, elem)| (leader_distance(leader, elem.span), i))
        .collect();
    indexed.sort_by_key(|&(dist, _)| dist);

    let mut tokens = Vec::with_capacity(indexed.len());
    let mut spacer_ids = Vec::with_capacity(indexed.len());
    let mut distances = Vec::with_capacity(indexed.len());
    for (dist, i) in indexed {
        let elem = &locus.elements[i];
        tokens.push(elem.cluster);
        spacer_ids.push(elem.id.clone());
        distances.push(dist);
    }

    Some(OrderedArray {
        tokens,
        spacer_ids,
        distances,
    })
}
