//! Biomedical ontology closure and path-provenance indexing.
//!
//! `ontotree` ingests a hierarchical ontology in the OBO stanza format,
//! builds a directed graph of its `is_a`/`part_of` relations, computes for
//! every term the transitive closure of its ancestors, and for every
//! (term, ancestor) pair enumerates every simple path between them so that
//! consumers can query the provenance of a relationship, not just its
//! existence. Records are delivered to a pluggable index sink in batches.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod index;
pub mod logger;
pub mod obo;
pub mod ontology;

pub use errors::{Error, Result};
