use dijkstra_sssp::graph::{AdjacencyGraph, Graph};
use dijkstra_sssp::loader::parse_graph;
use dijkstra_sssp::report::TextReport;
use dijkstra_sssp::{Dijkstra, ShortestPathAlgorithm};

// Room names as they appear on the edges pointing at each room
fn room_names(graph: &AdjacencyGraph<u64>) -> Vec<String> {
    let mut names = vec![String::from("?"); graph.vertex_count()];
    for (_, edge) in graph.edges() {
        if let Some(label) = &edge.label {
            names[edge.destination] = label.clone();
        }
    }
    names
}

fn main() -> dijkstra_sssp::Result<()> {
    env_logger::init();

    let graph = parse_graph(include_str!("../data/campus.json"))?;
    let names = room_names(&graph);
    let source = 0;

    println!("--- Walking times across the school ---");
    println!("Graph has {} rooms and {} corridors", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;
    print!("{}", TextReport(&result));

    println!("\nBy room name:");
    for (vertex, distance) in result.distances.iter().enumerate() {
        match distance {
            Some(d) => println!("  {:<16} {}", names[vertex], d),
            None => println!("  {:<16} unreachable", names[vertex]),
        }
    }

    Ok(())
}
