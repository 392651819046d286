//! Delivery of closure records to a document index.
//!
//! The remote document store is an external collaborator; this module
//! defines the sink contract the emitter speaks plus two local
//! implementations, an in-memory sink for tests and inspection and a
//! JSON-lines file sink for operational runs.

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::ontology::ClosureRecord;

/// Errors raised while delivering records to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink's underlying writer failed.
    #[error("index sink I/O failure: {0}")]
    Io(#[from] std::io::Error),
    /// A record could not be serialized for delivery.
    #[error("failed to serialize record {id}: {source}")]
    Serialize {
        id: u64,
        #[source]
        source: serde_json::Error,
    },
    /// The sink refused the record or the flush.
    #[error("index sink rejected record {id}: {reason}")]
    Rejected { id: u64, reason: String },
}

/// Contract for bulk record delivery.
///
/// Implementors receive one record per call, keyed by a monotonically
/// increasing integer id, and must persist buffered records on `flush`.
/// The emitter sends a flush after every batch and once after the last
/// record; a returned error terminates the run, retries are the sink
/// owner's policy.
#[async_trait]
pub trait IndexSink: Send {
    /// Accepts one closure record under the given id.
    async fn index(&mut self, id: u64, record: &ClosureRecord) -> Result<(), SinkError>;

    /// Commits everything accepted since the previous flush.
    async fn flush(&mut self) -> Result<(), SinkError>;
}

/// In-memory sink recording everything it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<(u64, ClosureRecord)>,
    flushes: usize,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, in arrival order.
    #[must_use]
    pub fn records(&self) -> &[(u64, ClosureRecord)] {
        &self.records
    }

    /// Number of flush signals received.
    #[must_use]
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

#[async_trait]
impl IndexSink for MemorySink {
    async fn index(&mut self, id: u64, record: &ClosureRecord) -> Result<(), SinkError> {
        self.records.push((id, record.clone()));
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Serialize)]
struct IndexedRecord<'a> {
    id: u64,
    #[serde(flatten)]
    doc: &'a ClosureRecord,
}

/// File-backed sink writing one JSON document per line.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Creates (or truncates) the target file.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = File::create(path).await?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

#[async_trait]
impl IndexSink for JsonlSink {
    async fn index(&mut self, id: u64, record: &ClosureRecord) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(&IndexedRecord { id, doc: record })
            .map_err(|source| SinkError::Serialize { id, source })?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().await?;
        Ok(())
    }
}
