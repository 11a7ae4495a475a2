//! Core CRISPR locus model
//!
//! A locus is an array of spacers on a scaffold, optionally flanked by a
//! leader region. Spacers carry a cluster identifier assigned upstream
//! (elements in the same cluster count as identical for alignment); the
//! comparison engine only ever works on those cluster symbols, never on
//! nucleotide sequence.

pub mod ordering;
pub mod truncation;

pub use ordering::order_by_leader;
pub use truncation::is_edge_truncated;

use rustc_hash::FxHashMap;

/// Genomic interval normalized to the + strand: 1-based, inclusive,
/// `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

impl Span {
    /// Build a span from coordinates given in either orientation.
    pub fn normalized(a: i64, b: i64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }
}

/// Interned spacer-cluster symbol. Equality is the only meaningful
/// comparison; the numeric value is a load-time artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterId(pub u32);

/// Dense interner for cluster labels.
///
/// Cluster identifiers arrive as opaque strings. Alignment compares them
/// only for equality, so each distinct label is swapped for a dense u32
/// once at load and the label kept for reporting.
#[derive(Debug, Default)]
pub struct ClusterTable {
    ids: FxHashMap<String, ClusterId>,
    labels: Vec<String>,
}

impl ClusterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, label: &str) -> ClusterId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = ClusterId(self.labels.len() as u32);
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Original label for an interned id.
    pub fn label(&self, id: ClusterId) -> &str {
        &self.labels[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One spacer of a CRISPR array.
#[derive(Debug, Clone)]
pub struct ArrayElement {
    pub id: String,
    pub span: Span,
    pub cluster: ClusterId,
}

/// A CRISPR locus: array extent, optional leader, and the spacers.
///
/// A locus without leader coordinates cannot be ordered and is excluded
/// from comparison (counted, not failed).
#[derive(Debug, Clone)]
pub struct Locus {
    pub id: String,
    pub scaffold: String,
    pub array: Span,
    pub leader: Option<Span>,
    pub elements: Vec<ArrayElement>,
}

/// A locus's spacers sorted by ascending distance from the leader.
///
/// The vectors are parallel: `tokens[i]`, `spacer_ids[i]` and
/// `distances[i]` all describe the element at leader-relative position
/// `i + 1`. Only `tokens` feeds the aligner; the rest is kept for
/// reporting.
#[derive(Debug, Clone)]
pub struct OrderedArray {
    pub tokens: Vec<ClusterId>,
    pub spacer_ids: Vec<String>,
    pub distances: Vec<i64>,
}

impl OrderedArray {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
