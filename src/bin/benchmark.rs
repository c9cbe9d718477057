use dijkstra_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use dijkstra_sssp::graph::generators::generate_random_graph;
use dijkstra_sssp::graph::{AdjacencyGraph, Graph};
use std::time::{Duration, Instant};

// Function to benchmark a single search on a graph
fn benchmark_search(dijkstra: &Dijkstra, graph: &AdjacencyGraph<u64>, source: usize) -> dijkstra_sssp::Result<Duration> {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?} ({} pushes, {} stale)",
        result.distances.reachable_count(),
        duration,
        result.stats.pushes,
        result.stats.stale_skipped
    );

    Ok(duration)
}

fn main() -> dijkstra_sssp::Result<()> {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let batch_sources = 8;

    println!("=====================================================");
    println!("Benchmark: single search vs {}-source parallel batch", batch_sources);
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, 100, size as u64)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let single_time = benchmark_search(&dijkstra, &graph, 0)?;

        let sources: Vec<usize> = (0..batch_sources).map(|i| i * size / batch_sources).collect();
        let start = Instant::now();
        dijkstra.compute_from_sources(&graph, &sources)?;
        let batch_time = start.elapsed();
        println!("  - Batch of {} sources in {:?}", sources.len(), batch_time);

        results.push((size, single_time, batch_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Single (ms)", "Batch (ms)", "Per-source");
    println!("-----------------------------------------------------");

    for (size, single_time, batch_time) in &results {
        let per_source = batch_time.as_secs_f64() / batch_sources as f64 / single_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            single_time.as_millis(),
            batch_time.as_millis(),
            per_source
        );
    }

    Ok(())
}
