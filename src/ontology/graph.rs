use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::value_objects::TermId;

/// Relation kinds that produce closure-bearing graph edges.
///
/// `develops_from` relations are recorded on terms but never become edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    IsA,
    PartOf,
}

impl RelationKind {
    /// Returns the tag-value spelling of the relation kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsA => "is_a",
            Self::PartOf => "part_of",
        }
    }
}

/// Directed multigraph over term identifiers.
///
/// Edges point from a child to its referenced parent or whole. Multiple
/// edges between the same ordered pair with different kinds are all
/// retained; nodes include stub identifiers that were only ever referenced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationGraph {
    adjacency: BTreeMap<TermId, BTreeMap<TermId, BTreeSet<RelationKind>>>,
}

impl RelationGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a typed edge. Returns `false` when the identical edge was
    /// already present.
    pub fn add_edge(&mut self, from: TermId, to: TermId, kind: RelationKind) -> bool {
        self.adjacency
            .entry(from)
            .or_default()
            .entry(to)
            .or_default()
            .insert(kind)
    }

    /// Returns the direct successors of a node in deterministic order.
    pub fn successors<'a>(&'a self, from: &TermId) -> impl Iterator<Item = &'a TermId> + 'a {
        self.adjacency
            .get(from)
            .into_iter()
            .flat_map(BTreeMap::keys)
    }

    /// Returns the relation kinds recorded on the ordered pair, if any.
    #[must_use]
    pub fn kinds(&self, from: &TermId, to: &TermId) -> Option<&BTreeSet<RelationKind>> {
        self.adjacency.get(from).and_then(|targets| targets.get(to))
    }

    /// Returns whether the exact typed edge exists.
    #[must_use]
    pub fn contains_edge(&self, from: &TermId, to: &TermId, kind: RelationKind) -> bool {
        self.kinds(from, to)
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// Total number of typed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeSet::len)
            .sum()
    }
}
