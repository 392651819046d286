use std::collections::BTreeSet;

use tracing::debug;

use super::graph::{RelationGraph, RelationKind};
use super::store::TermStore;
use super::value_objects::TermId;

/// Fills every term's ancestor closure and materializes the relation graph.
///
/// This is the only place graph edges are created: one `is_a` edge per
/// direct parent and one `part_of` edge per direct `part_of` target. The
/// whole store is processed before the graph is returned, so path
/// enumeration always observes the complete edge set.
pub fn compute_closures(store: &mut TermStore) -> RelationGraph {
    let mut graph = RelationGraph::new();
    let mut closures: Vec<(TermId, BTreeSet<TermId>)> = Vec::with_capacity(store.len());

    for term in store.terms() {
        closures.push((term.id().clone(), expand(store, term.data())));
        for parent in term.parents() {
            graph.add_edge(term.id().clone(), parent.clone(), RelationKind::IsA);
        }
        for whole in term.part_of() {
            graph.add_edge(term.id().clone(), whole.clone(), RelationKind::PartOf);
        }
    }

    for (id, closure) in closures {
        if let Some(term) = store.get_mut(&id) {
            term.set_closure(closure);
        }
    }
    debug!(edges = graph.edge_count(), "relation graph materialized");
    graph
}

/// Breadth-first frontier expansion over `data` edges.
///
/// Each layer of the frontier is drained before the next is visited. A node
/// already accumulated is neither re-added nor re-expanded, which bounds
/// the traversal by the number of distinct nodes and guarantees termination
/// on cyclic input.
fn expand(store: &TermStore, seed: &BTreeSet<TermId>) -> BTreeSet<TermId> {
    let mut results = BTreeSet::new();
    let mut frontier: Vec<TermId> = seed.iter().cloned().collect();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for node in frontier {
            if !results.insert(node.clone()) {
                continue;
            }
            if let Some(term) = store.get(&node) {
                for member in term.data() {
                    if !results.contains(member) {
                        next.push(member.clone());
                    }
                }
            }
        }
        frontier = next;
    }
    results
}
