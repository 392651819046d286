use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{debug, warn};

use crate::config::OntologySettings;
use crate::obo::{Stanza, StanzaKind};

use super::entities::Term;
use super::value_objects::TermId;

/// Mapping from term identifier to its [`Term`] record, owning every term
/// for the lifetime of one ontology load.
///
/// Every identifier referenced as a parent, `part_of` or `develops_from`
/// target exists at least as a stub entry, so later traversal never
/// dereferences a missing key. Construction populates relation lists only;
/// graph edges are registered during closure computation.
#[derive(Clone, Debug, Default)]
pub struct TermStore {
    terms: BTreeMap<TermId, Term>,
    discarded: BTreeSet<TermId>,
}

impl TermStore {
    /// Builds the store from a tokenized stanza sequence.
    ///
    /// Stanzas that fail required-field extraction are collected into a
    /// discard set and pruned after the full scan, never mid-iteration.
    #[must_use]
    pub fn from_stanzas<I>(stanzas: I, settings: &OntologySettings) -> Self
    where
        I: IntoIterator<Item = Stanza>,
    {
        let mut store = Self::default();
        for stanza in stanzas {
            if stanza.kind() != StanzaKind::Term || stanza.is_empty() {
                continue;
            }
            store.apply_stanza(&stanza, settings);
        }
        store.prune_discarded();
        for term in store.terms.values_mut() {
            term.derive_data();
        }
        store
    }

    fn apply_stanza(&mut self, stanza: &Stanza, settings: &OntologySettings) {
        let Some(raw_id) = stanza.first("id") else {
            warn!("term stanza without an id tag skipped");
            return;
        };
        let Ok(id) = TermId::new(raw_id) else {
            debug!(id = raw_id, "skipping term with malformed identifier");
            return;
        };
        if !settings.admits(&id) {
            debug!(%id, "skipping term with foreign prefix");
            return;
        }

        let name = stanza.first("name").unwrap_or_default().to_owned();
        self.entry(id.clone()).set_name(name);

        for value in stanza.values("is_a") {
            // Only the identifier before the first space counts; the rest of
            // the value is a display comment.
            let Some(token) = value.split_whitespace().next() else {
                warn!(%id, "discarding term with blank is_a value");
                self.discarded.insert(id);
                return;
            };
            let Ok(parent) = TermId::new(token) else {
                debug!(%id, parent = token, "ignoring unparsable parent reference");
                continue;
            };
            if !settings.admits(&parent) {
                continue;
            }
            if settings.is_excluded(&parent) {
                debug!(%id, %parent, "dropping edge to excluded identifier");
                continue;
            }
            self.entry(id.clone()).add_parent(parent.clone());
            self.entry(parent).add_child(id.clone());
        }

        for value in stanza.values("relationship") {
            let mut tokens = value.split_whitespace();
            let (Some(kind), Some(target)) = (tokens.next(), tokens.next()) else {
                warn!(%id, "discarding term with truncated relationship value");
                self.discarded.insert(id);
                return;
            };
            if kind != "part_of" && kind != "develops_from" {
                continue;
            }
            if !annotation_admits(tokens.next(), settings) {
                continue;
            }
            let Ok(target) = TermId::new(target) else {
                debug!(%id, target, "ignoring unparsable relation target");
                continue;
            };
            if !settings.admits(&target) || settings.is_excluded(&target) {
                continue;
            }
            if kind == "part_of" {
                self.entry(id.clone()).add_part_of(target.clone());
            } else {
                self.entry(id.clone()).add_develops_from(target.clone());
            }
            self.entry(target);
        }
    }

    fn entry(&mut self, id: TermId) -> &mut Term {
        self.terms
            .entry(id)
            .or_insert_with_key(|id| Term::stub(id.clone()))
    }

    fn prune_discarded(&mut self) {
        for id in &self.discarded {
            self.terms.remove(id);
        }
    }

    /// Returns the term recorded for an identifier, if any.
    #[must_use]
    pub fn get(&self, id: &TermId) -> Option<&Term> {
        self.terms.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &TermId) -> Option<&mut Term> {
        self.terms.get_mut(id)
    }

    /// Returns whether the identifier exists in the store, stub or defined.
    #[must_use]
    pub fn contains(&self, id: &TermId) -> bool {
        self.terms.contains_key(id)
    }

    /// Number of stored terms, stubs included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates term identifiers in deterministic order.
    pub fn ids(&self) -> impl Iterator<Item = &TermId> {
        self.terms.keys()
    }

    /// Iterates terms in deterministic identifier order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Identifiers of stanzas discarded during construction.
    #[must_use]
    pub fn discarded(&self) -> &BTreeSet<TermId> {
        &self.discarded
    }

    /// Every term reachable from `id` through `is_a` parents, including the
    /// starting identifier. Terminates on cyclic input.
    #[must_use]
    pub fn ancestors(&self, id: &TermId) -> BTreeSet<TermId> {
        self.walk(id, |term| term.parents())
    }

    /// Every term reachable from `id` through children, including the
    /// starting identifier. Terminates on cyclic input.
    #[must_use]
    pub fn descendants(&self, id: &TermId) -> BTreeSet<TermId> {
        self.walk(id, |term| term.children())
    }

    fn walk<'a, F>(&'a self, start: &TermId, next: F) -> BTreeSet<TermId>
    where
        F: Fn(&'a Term) -> &'a [TermId],
    {
        let mut seen = BTreeSet::from([start.clone()]);
        let mut frontier = VecDeque::from([start.clone()]);
        while let Some(current) = frontier.pop_front() {
            if let Some(term) = self.get(&current) {
                for node in next(term) {
                    if seen.insert(node.clone()) {
                        frontier.push_back(node.clone());
                    }
                }
            }
        }
        seen
    }
}

fn annotation_admits(annotation: Option<&str>, settings: &OntologySettings) -> bool {
    // Literal compatibility with the source load, including the "source"
    // substring match. A line without an annotation token is ignored.
    annotation.is_some_and(|annotation| {
        annotation == "!"
            || annotation.contains(settings.taxon_marker.as_str())
            || annotation.contains("source")
    })
}
