use std::collections::BTreeSet;
use std::io::BufRead;

use tracing::info;

use crate::config::{Config, IndexerSettings, OntologySettings};
use crate::errors::Result;
use crate::index::{IndexSink, SinkError};
use crate::obo::read_stanzas;

use super::closure::compute_closures;
use super::graph::RelationGraph;
use super::paths::PathEnumerator;
use super::slims::all_slims;
use super::store::TermStore;
use super::value_objects::TermId;

/// Counters describing one completed load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadSummary {
    /// Terms held by the store after pruning, stubs included.
    pub terms: usize,
    /// Stanzas discarded as malformed.
    pub discarded: usize,
    /// Closure records delivered to the sink.
    pub records: u64,
}

/// Assembles one record per (term, ancestor) pair and hands it to the sink.
///
/// Emission order is term order, then each term's closure members. Records
/// are keyed by a monotonically increasing id starting at zero; a flush is
/// signalled after every `batch_size` records and once after the last one.
pub struct RecordEmitter {
    batch_size: u64,
}

impl RecordEmitter {
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1) as u64,
        }
    }

    /// Emits every closure record. A sink error terminates the run.
    pub async fn emit<S: IndexSink>(
        &self,
        store: &TermStore,
        graph: &RelationGraph,
        sink: &mut S,
    ) -> Result<u64, SinkError> {
        let enumerator = PathEnumerator::new(store, graph);
        let mut next_id: u64 = 0;
        for term in store.terms() {
            for ancestor in term.closure() {
                let record = enumerator.record(term.id(), ancestor);
                sink.index(next_id, &record).await?;
                next_id += 1;
                if next_id % self.batch_size == 0 {
                    sink.flush().await?;
                }
            }
        }
        sink.flush().await?;
        Ok(next_id)
    }
}

/// High level service running one full ontology load against a sink.
///
/// Phases are strictly ordered: store construction, then closure
/// computation (which freezes the relation graph), then slim resolution,
/// then path enumeration and emission. Path enumeration only ever reads.
#[derive(Clone, Debug)]
pub struct OntologyIndexService {
    ontology: OntologySettings,
    indexer: IndexerSettings,
}

impl OntologyIndexService {
    /// Builds a service instance from configuration settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            ontology: config.ontology.clone(),
            indexer: config.indexer.clone(),
        }
    }

    /// Builds the store and graph for one load: tokenize, construct,
    /// compute closures, resolve slims.
    ///
    /// Closure computation finishes for the whole store before this
    /// returns, so the result is frozen and safe to read from any number
    /// of concurrent enumerators.
    pub fn load<R: BufRead>(&self, source: R) -> Result<(TermStore, RelationGraph)> {
        let stanzas = read_stanzas(source)?;
        info!(stanzas = stanzas.len(), "ontology source tokenized");

        let mut store = TermStore::from_stanzas(stanzas, &self.ontology);
        info!(
            terms = store.len(),
            discarded = store.discarded().len(),
            "term store built"
        );

        let graph = compute_closures(&mut store);
        info!(edges = graph.edge_count(), "closures computed");

        let slims: Vec<(TermId, BTreeSet<String>)> = store
            .terms()
            .map(|term| (term.id().clone(), all_slims(term.closure())))
            .collect();
        for (id, labels) in slims {
            if let Some(term) = store.get_mut(&id) {
                term.set_slims(labels);
            }
        }

        Ok((store, graph))
    }

    /// Runs one full load: build everything, then enumerate and emit.
    pub async fn run<R, S>(&self, source: R, sink: &mut S) -> Result<LoadSummary>
    where
        R: BufRead,
        S: IndexSink,
    {
        let (store, graph) = self.load(source)?;

        let emitter = RecordEmitter::new(self.indexer.batch_size);
        let records = emitter.emit(&store, &graph, sink).await?;
        info!(records, index = %self.indexer.index, "records delivered");

        Ok(LoadSummary {
            terms: store.len(),
            discarded: store.discarded().len(),
            records,
        })
    }
}
