//! Loading graphs from JSON files.
//!
//! ```json
//! {
//!   "vertex_count": 3,
//!   "edges": [
//!     { "from": 0, "to": 1, "weight": 10, "label": "Science" },
//!     { "from": 0, "to": 2, "weight": 2 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};

/// On-disk shape of a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    /// Signed so that negative weights are reported rather than rejected as
    /// a parse error
    pub weight: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphFile {
    /// Builds the graph, rejecting negative weights and dangling endpoints
    pub fn into_graph(self) -> Result<AdjacencyGraph<u64>> {
        let mut graph = AdjacencyGraph::new(self.vertex_count);
        for record in self.edges {
            let weight = u64::try_from(record.weight).map_err(|_| Error::NegativeWeight {
                from: record.from,
                to: record.to,
                weight: record.weight.to_string(),
            })?;
            match record.label {
                Some(label) => graph.add_labeled_edge(record.from, record.to, weight, label)?,
                None => graph.add_edge(record.from, record.to, weight)?,
            }
        }
        Ok(graph)
    }
}

/// Parses a graph from a JSON string
pub fn parse_graph(json: &str) -> Result<AdjacencyGraph<u64>> {
    let file: GraphFile = serde_json::from_str(json)?;
    file.into_graph()
}

/// Reads and parses a graph file
pub fn load_graph(path: impl AsRef<Path>) -> Result<AdjacencyGraph<u64>> {
    let path = path.as_ref();
    let graph = parse_graph(&fs::read_to_string(path)?)?;
    info!(
        "Loaded graph from {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
