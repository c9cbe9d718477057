pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{Graph, Weight};
pub use adjacency::{AdjacencyGraph, Edge};
