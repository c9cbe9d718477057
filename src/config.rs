use std::path::PathBuf;

use clap::ValueEnum;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::{loader, report, Result};

/// How a finished search is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a single command-line run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub graph_path: PathBuf,
    pub source: usize,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("data/campus.json"),
            source: 0,
            format: OutputFormat::Text,
        }
    }
}

/// Loads the configured graph, runs one search and renders the report
pub fn run(config: &RunConfig) -> Result<String> {
    let graph = loader::load_graph(&config.graph_path)?;
    let result = Dijkstra::new().compute_shortest_paths(&graph, config.source)?;

    match config.format {
        OutputFormat::Text => Ok(report::format_text(&result)),
        OutputFormat::Json => report::format_json(&result),
    }
}
