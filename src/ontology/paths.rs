use serde::Serialize;

use super::graph::{RelationGraph, RelationKind};
use super::store::TermStore;
use super::value_objects::TermId;

/// Identifier and display name of one endpoint of a provenance link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    pub id: String,
    pub name: String,
}

/// One edge of the provenance subgraph connecting a term to an ancestor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(rename = "s")]
    pub source: NodeRef,
    #[serde(rename = "t")]
    pub target: NodeRef,
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

/// Output unit for one (term, ancestor) closure pair.
///
/// The link list is the edge set of the provenance subgraph: every link is
/// a real edge on at least one simple path from source to target, and no
/// two links share the same (source, target, kind) triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClosureRecord {
    pub source: String,
    pub source_name: String,
    pub target: String,
    pub target_name: String,
    pub links: Vec<Link>,
}

/// Enumerates simple paths through the frozen relation graph and reduces
/// them to deduplicated link lists. Reads the store and graph only.
pub struct PathEnumerator<'a> {
    store: &'a TermStore,
    graph: &'a RelationGraph,
}

impl<'a> PathEnumerator<'a> {
    #[must_use]
    pub fn new(store: &'a TermStore, graph: &'a RelationGraph) -> Self {
        Self { store, graph }
    }

    /// Builds the closure record for one (term, ancestor) pair.
    ///
    /// Stub endpoints render an empty name rather than failing; downstream
    /// consumers tolerate unnamed nodes.
    #[must_use]
    pub fn record(&self, source: &TermId, target: &TermId) -> ClosureRecord {
        let mut links: Vec<Link> = Vec::new();
        for path in self.simple_paths(source, target) {
            for pair in path.windows(2) {
                let Some(kinds) = self.graph.kinds(&pair[0], &pair[1]) else {
                    continue;
                };
                for kind in kinds {
                    let link = Link {
                        source: self.node_ref(&pair[0]),
                        target: self.node_ref(&pair[1]),
                        kind: *kind,
                    };
                    if !links.contains(&link) {
                        links.push(link);
                    }
                }
            }
        }

        ClosureRecord {
            source: source.to_string(),
            source_name: self.name_of(source),
            target: target.to_string(),
            target_name: self.name_of(target),
            links,
        }
    }

    /// Every simple directed path from `source` to `target`.
    ///
    /// Exhaustive enumeration is exponential on dense graphs; this is an
    /// accepted limitation, never silently capped, because ontology graphs
    /// are sparse DAGs in the overwhelmingly common case and the known
    /// pathological node is excluded at load time.
    #[must_use]
    pub fn simple_paths(&self, source: &TermId, target: &TermId) -> Vec<Vec<TermId>> {
        let mut found = Vec::new();
        let mut path = vec![source.clone()];
        self.descend(source, target, &mut path, &mut found);
        found
    }

    fn descend(
        &self,
        current: &TermId,
        target: &TermId,
        path: &mut Vec<TermId>,
        found: &mut Vec<Vec<TermId>>,
    ) {
        if current == target {
            found.push(path.clone());
            return;
        }
        // The path vector doubles as the visited stack: a node already on it
        // would close a loop, so the branch is skipped.
        let successors: Vec<TermId> = self.graph.successors(current).cloned().collect();
        for next in successors {
            if path.contains(&next) {
                continue;
            }
            path.push(next.clone());
            self.descend(&next, target, path, found);
            path.pop();
        }
    }

    fn node_ref(&self, id: &TermId) -> NodeRef {
        NodeRef {
            id: id.to_string(),
            name: self.name_of(id),
        }
    }

    fn name_of(&self, id: &TermId) -> String {
        self.store
            .get(id)
            .map(|term| term.name().to_owned())
            .unwrap_or_default()
    }
}
