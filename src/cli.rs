//! Command line entry point for running one ontology load.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::errors::Result;
use crate::index::JsonlSink;
use crate::logger;
use crate::ontology::OntologyIndexService;

/// Parses an OBO ontology and indexes its closure records.
#[derive(Debug, Parser)]
#[command(name = "ontotree", version, about)]
pub struct Cli {
    /// Path to the OBO ontology source file.
    pub source: PathBuf,

    /// Optional YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Destination for the JSON-lines output. Defaults to `<index>.jsonl`
    /// in the working directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the CLI: load configuration, open the source, drive one load.
pub async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    logger::init(&config.logger);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.jsonl", config.indexer.index)));
    info!(
        source = %cli.source.display(),
        output = %output.display(),
        "starting ontology load"
    );

    let reader = BufReader::new(File::open(&cli.source)?);
    let mut sink = JsonlSink::create(&output).await?;
    let service = OntologyIndexService::from_config(&config);
    let summary = service.run(reader, &mut sink).await?;

    info!(
        terms = summary.terms,
        discarded = summary.discarded,
        records = summary.records,
        "load complete"
    );
    Ok(())
}
