use std::collections::BTreeSet;

use super::value_objects::TermId;

/// Ontology term capturing its direct relations and the closure data derived
/// from them during a load.
///
/// Relation lists keep insertion order and never hold duplicates; `data`,
/// `closure` and `slims` are derived sets where only membership matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    id: TermId,
    name: String,
    parents: Vec<TermId>,
    children: Vec<TermId>,
    part_of: Vec<TermId>,
    develops_from: Vec<TermId>,
    data: BTreeSet<TermId>,
    closure: BTreeSet<TermId>,
    slims: BTreeSet<String>,
}

fn push_unique(list: &mut Vec<TermId>, value: TermId) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}

impl Term {
    /// Creates a stub term: known only by identifier, with an empty name and
    /// no relations of its own.
    #[must_use]
    pub fn stub(id: TermId) -> Self {
        Self {
            id,
            name: String::new(),
            parents: Vec::new(),
            children: Vec::new(),
            part_of: Vec::new(),
            develops_from: Vec::new(),
            data: BTreeSet::new(),
            closure: BTreeSet::new(),
            slims: BTreeSet::new(),
        }
    }

    /// Overwrites the display name, preserving every relation already
    /// accumulated on a stub.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adds a direct `is_a` parent. Returns `false` when already present.
    pub fn add_parent(&mut self, parent: TermId) -> bool {
        push_unique(&mut self.parents, parent)
    }

    /// Adds a direct child, the inverse of a parent relation.
    pub fn add_child(&mut self, child: TermId) -> bool {
        push_unique(&mut self.children, child)
    }

    /// Adds a `part_of` target. Returns `false` when already present.
    pub fn add_part_of(&mut self, whole: TermId) -> bool {
        push_unique(&mut self.part_of, whole)
    }

    /// Adds a `develops_from` target. Returns `false` when already present.
    pub fn add_develops_from(&mut self, origin: TermId) -> bool {
        push_unique(&mut self.develops_from, origin)
    }

    /// Derives the `data` set, the union of parents and `part_of` targets.
    /// This is the single relation that drives closure computation.
    pub fn derive_data(&mut self) {
        self.data = self
            .parents
            .iter()
            .chain(self.part_of.iter())
            .cloned()
            .collect();
    }

    /// Stores the computed ancestor closure. Called exactly once per load.
    pub fn set_closure(&mut self, closure: BTreeSet<TermId>) {
        self.closure = closure;
    }

    /// Stores the slim category labels resolved from the closure.
    pub fn set_slims(&mut self, slims: BTreeSet<String>) {
        self.slims = slims;
    }

    /// Returns the term identifier.
    #[must_use]
    pub fn id(&self) -> &TermId {
        &self.id
    }

    /// Returns the display name, empty for stub terms.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the direct `is_a` parents in insertion order.
    #[must_use]
    pub fn parents(&self) -> &[TermId] {
        &self.parents
    }

    /// Returns the direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[TermId] {
        &self.children
    }

    /// Returns the `part_of` targets in insertion order.
    #[must_use]
    pub fn part_of(&self) -> &[TermId] {
        &self.part_of
    }

    /// Returns the `develops_from` targets in insertion order.
    #[must_use]
    pub fn develops_from(&self) -> &[TermId] {
        &self.develops_from
    }

    /// Returns the derived `data` set, parents union `part_of`.
    #[must_use]
    pub fn data(&self) -> &BTreeSet<TermId> {
        &self.data
    }

    /// Returns every ancestor reachable through `data` edges.
    #[must_use]
    pub fn closure(&self) -> &BTreeSet<TermId> {
        &self.closure
    }

    /// Returns the slim category labels.
    #[must_use]
    pub fn slims(&self) -> &BTreeSet<String> {
        &self.slims
    }
}
