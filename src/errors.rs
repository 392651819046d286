use std::path::PathBuf;

use thiserror::Error;

use crate::index::SinkError;
use crate::obo::OboError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error for an ontology indexing run.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the configuration file failed.
    #[error("failed to read config file `{path}`: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file did not parse.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    /// The configuration parsed but is unusable.
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),
    /// The ontology source stream failed.
    #[error(transparent)]
    Obo(#[from] OboError),
    /// The index sink rejected a record or a flush.
    #[error(transparent)]
    Sink(#[from] SinkError),
    /// Filesystem access outside the phases above failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
