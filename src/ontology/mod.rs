//! Core ontology domain: term store, relation graph, ancestor closures and
//! path-provenance enumeration.
//!
//! The module is organized around one load lifecycle. The store and graph
//! are built once, frozen after closure computation, and only read during
//! path enumeration; nothing persists between runs.

pub mod closure;
pub mod entities;
pub mod graph;
pub mod paths;
pub mod service;
pub mod slims;
pub mod store;
pub mod value_objects;

pub use closure::compute_closures;
pub use entities::Term;
pub use graph::{RelationGraph, RelationKind};
pub use paths::{ClosureRecord, Link, NodeRef, PathEnumerator};
pub use service::{LoadSummary, OntologyIndexService, RecordEmitter};
pub use slims::{all_slims, developmental_slims, organ_slims, system_slims};
pub use store::TermStore;
pub use value_objects::{TermId, TermIdError};
