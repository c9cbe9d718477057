use crate::graph::AdjacencyGraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `1..=max_weight`; self-loops are skipped.
/// The same seed always yields the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> Result<AdjacencyGraph<u64>> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = AdjacencyGraph::new(n);
    if n < 2 {
        return Ok(graph);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight))?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid where each cell links to its four
/// neighbours in both directions with the given weight.
pub fn generate_grid(width: usize, height: usize, weight: u64) -> Result<AdjacencyGraph<u64>> {
    let mut graph = AdjacencyGraph::new(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, weight)?;
                graph.add_edge(vertex + 1, vertex, weight)?;
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, weight)?;
                graph.add_edge(vertex + width, vertex, weight)?;
            }
        }
    }

    Ok(graph)
}
