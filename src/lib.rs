//! Dijkstra SSSP - single-source shortest path distances on weighted directed graphs
//!
//! The engine keeps a binary-heap frontier with lazy deletion: improved tentative
//! distances are pushed as new entries and stale ones are discarded when popped,
//! using the visited set to recognise vertices whose distance is already final.
//!
//! Only distances are produced. Edge weights must be non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod config;
pub mod graph;
pub mod loader;
pub mod report;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra, DistanceTable, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
pub use graph::adjacency::{AdjacencyGraph, Edge};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Priority frontier is empty")]
    EmptyFrontier,

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: String },

    #[error("Distance overflows the weight type when relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
