//! Assembly of raw table rows into validated loci
//!
//! All shape checking happens here, once, so the alignment and scoring
//! code downstream can assume well-formed records. A malformed row is
//! fatal at load rather than patched over: a silently defaulted
//! coordinate would corrupt every leader distance computed from it.

use anyhow::{bail, Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

use super::tables;
use crate::loci::{ArrayElement, ClusterTable, Locus, Span};

/// Read-only snapshot of everything one run needs: validated loci in
/// sorted-id order, the cluster interner, and scaffold lengths when a
/// scaffold table was supplied.
#[derive(Debug)]
pub struct LocusStore {
    loci: Vec<Locus>,
    index: FxHashMap<String, usize>,
    clusters: ClusterTable,
    scaffold_lengths: FxHashMap<String, i64>,
}

impl LocusStore {
    /// Load and cross-validate the input tables.
    ///
    /// `loci_filter` restricts the run to the named loci; naming an
    /// unknown locus is an error rather than a silent no-op. When a
    /// scaffold table is given, every loaded locus must have a length
    /// entry for its scaffold.
    pub fn load(
        loci_path: &Path,
        spacers_path: &Path,
        scaffolds_path: Option<&Path>,
        loci_filter: Option<&[String]>,
    ) -> Result<Self> {
        let locus_rows = tables::read_loci(loci_path)?;
        let spacer_rows = tables::read_spacers(spacers_path)?;

        let all_ids: FxHashSet<&str> = locus_rows.iter().map(|r| r.locus_id.as_str()).collect();
        if let Some(filter) = loci_filter {
            for id in filter {
                if !all_ids.contains(id.as_str()) {
                    bail!(
                        "locus filter names '{}', which {} does not contain",
                        id,
                        loci_path.display()
                    );
                }
            }
        }
        let keep = |id: &str| -> bool {
            loci_filter.map_or(true, |f| f.iter().any(|x| x == id))
        };

        let mut clusters = ClusterTable::new();
        let mut elements_by_locus: FxHashMap<&str, Vec<ArrayElement>> = FxHashMap::default();
        for row in &spacer_rows {
            if !all_ids.contains(row.locus_id.as_str()) {
                bail!(
                    "{}: spacer '{}' references unknown locus '{}'",
                    spacers_path.display(),
                    row.spacer_id,
                    row.locus_id
                );
            }
            if !keep(&row.locus_id) {
                continue;
            }
            elements_by_locus
                .entry(row.locus_id.as_str())
                .or_default()
                .push(ArrayElement {
                    id: row.spacer_id.clone(),
                    span: Span::normalized(row.start, row.end),
                    cluster: clusters.intern(&row.cluster),
                });
        }

        let mut loci = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for row in &locus_rows {
            if !seen.insert(row.locus_id.as_str()) {
                bail!(
                    "{}: duplicate locus id '{}'",
                    loci_path.display(),
                    row.locus_id
                );
            }
            if !keep(&row.locus_id) {
                continue;
            }
            let leader = match (row.leader_start, row.leader_end) {
                (Some(a), Some(b)) => Some(Span::normalized(a, b)),
                (None, None) => None,
                _ => bail!(
                    "locus '{}': leader coordinates must be both present or both absent",
                    row.locus_id
                ),
            };
            let elements = match elements_by_locus.remove(row.locus_id.as_str()) {
                Some(elements) => elements,
                None => bail!(
                    "locus '{}' has no array elements in {}",
                    row.locus_id,
                    spacers_path.display()
                ),
            };
            loci.push(Locus {
                id: row.locus_id.clone(),
                scaffold: row.scaffold.clone(),
                array: Span::normalized(row.array_start, row.array_end),
                leader,
                elements,
            });
        }
        loci.sort_by(|a, b| a.id.cmp(&b.id));

        let mut scaffold_lengths = FxHashMap::default();
        if let Some(path) = scaffolds_path {
            for row in tables::read_scaffolds(path)? {
                if scaffold_lengths.insert(row.scaffold.clone(), row.length).is_some() {
                    bail!("{}: duplicate scaffold entry '{}'", path.display(), row.scaffold);
                }
            }
            for locus in &loci {
                if !scaffold_lengths.contains_key(&locus.scaffold) {
                    bail!(
                        "{}: no length entry for scaffold '{}' (needed by locus '{}')",
                        path.display(),
                        locus.scaffold,
                        locus.id
                    );
                }
            }
        }

        let index = loci
            .iter()
            .enumerate()
            .map(|(i, locus)| (locus.id.clone(), i))
            .collect();

        Ok(Self {
            loci,
            index,
            clusters,
            scaffold_lengths,
        })
    }

    /// All loaded loci, sorted by id.
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    pub fn get(&self, id: &str) -> Option<&Locus> {
        self.index.get(id).map(|&i| &self.loci[i])
    }

    pub fn clusters(&self) -> &ClusterTable {
        &self.clusters
    }

    /// Length of a scaffold, when a scaffold table was loaded.
    pub fn scaffold_length(&self, scaffold: &str) -> Option<i64> {
        self.scaffold_lengths.get(scaffold).copied()
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}

/// Split a comma-separated locus filter into ids.
pub fn parse_locus_filter(raw: &str) -> Result<Vec<String>> {
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        bail!("locus filter contains no locus ids");
    }
    Ok(ids)
}

/// Open the scaffold table path only when truncation checking is on.
pub fn scaffold_table_for_margin(
    scaffolds: Option<&Path>,
    margin: i64,
) -> Result<Option<&Path>> {
    if margin < 0 {
        return Ok(None);
    }
    scaffolds
        .with_context(|| {
            "a scaffold length table is required unless truncation checking \
             is disabled with a negative margin"
                .to_string()
        })
        .map(Some)
}
