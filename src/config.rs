//! Load-time configuration for an ontology indexing run.
//!
//! Settings deserialize from YAML; every field defaults to the values used
//! against the composite vertebrate ontology, so a missing or partial file
//! still yields a runnable configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::ontology::TermId;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ontology: OntologySettings,
    pub indexer: IndexerSettings,
    pub logger: LoggerSettings,
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.indexer.batch_size == 0 {
            return Err(Error::ConfigInvalid(
                "indexer.batch_size must be greater than zero".to_owned(),
            ));
        }
        if self.ontology.prefixes.is_empty() {
            return Err(Error::ConfigInvalid(
                "ontology.prefixes must name at least one admitted prefix".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Admission and filtering rules applied while building the term store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologySettings {
    /// Identifier prefixes admitted into the store; everything else is
    /// skipped, whether it appears as a term id or a relation target.
    pub prefixes: Vec<String>,
    /// Identifiers whose relation edges are dropped entirely. The default
    /// carries one known problematic node in the source ontology; no cause
    /// is assumed.
    pub excluded: Vec<String>,
    /// Taxon marker admitting a `relationship` line when its trailing
    /// annotation contains it.
    pub taxon_marker: String,
}

impl OntologySettings {
    /// Returns whether the identifier's prefix is admitted.
    #[must_use]
    pub fn admits(&self, id: &TermId) -> bool {
        self.prefixes.iter().any(|prefix| prefix == id.prefix())
    }

    /// Returns whether relation edges naming this identifier are dropped.
    #[must_use]
    pub fn is_excluded(&self, id: &TermId) -> bool {
        self.excluded.iter().any(|excluded| excluded == id.as_str())
    }
}

impl Default for OntologySettings {
    fn default() -> Self {
        Self {
            prefixes: [
                "UBERON",
                "CL",
                "CHEBI",
                "GO",
                "IAO",
                "PATO",
                "PR",
                "NCBITaxon",
            ]
            .map(str::to_owned)
            .to_vec(),
            excluded: vec!["CL:0000812".to_owned()],
            taxon_marker: "NCBITaxon:9606".to_owned(),
        }
    }
}

/// Emission policy towards the index sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerSettings {
    /// Logical index name, used to derive default sink destinations.
    pub index: String,
    /// Number of records between explicit flush signals. A tunable, not an
    /// invariant.
    pub batch_size: usize,
}

impl Default for IndexerSettings {
    fn default() -> Self {
        Self {
            index: "ontology-tree".to_owned(),
            batch_size: 5000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}
