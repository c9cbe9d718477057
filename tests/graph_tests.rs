use dijkstra_sssp::graph::generators::{generate_grid, generate_random_graph};
use dijkstra_sssp::graph::{AdjacencyGraph, Edge, Graph};
use dijkstra_sssp::Error;

#[test]
fn test_edges_keep_insertion_order() {
    let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new(4);
    graph.add_edge(0, 3, 1).unwrap();
    graph.add_labeled_edge(0, 1, 2, "Science").unwrap();
    graph.add_edge(0, 2, 3).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(
        graph.edges_from(0).unwrap(),
        &[Edge::new(3, 1), Edge::labeled(1, 2, "Science"), Edge::new(2, 3)]
    );
    assert!(graph.edges_from(3).unwrap().is_empty());
}

#[test]
fn test_edges_from_out_of_range() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::new(2);
    assert!(matches!(
        graph.edges_from(2),
        Err(Error::OutOfRange { vertex: 2, vertex_count: 2 })
    ));
    assert!(graph.has_vertex(1));
    assert!(!graph.has_vertex(2));
}

#[test]
fn test_add_edge_rejects_dangling_endpoints() {
    let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new(2);
    assert!(matches!(graph.add_edge(0, 5, 1), Err(Error::OutOfRange { vertex: 5, .. })));
    assert!(matches!(graph.add_edge(7, 1, 1), Err(Error::OutOfRange { vertex: 7, .. })));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_negative_weights_are_stored_but_detectable() {
    let mut graph: AdjacencyGraph<i32> = AdjacencyGraph::new(3);
    graph.add_edge(0, 1, 2).unwrap();
    assert!(graph.validate_non_negative().is_ok());

    graph.add_edge(2, 0, -1).unwrap();
    assert_eq!(graph.edge_count(), 2);
    match graph.validate_non_negative() {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!((from, to), (2, 0));
            assert_eq!(weight, "-1");
        }
        other => panic!("expected NegativeWeight, got {:?}", other),
    }
}

#[test]
fn test_random_graph_is_seeded() {
    let a = generate_random_graph(100, 2.0, 10, 42).unwrap();
    let b = generate_random_graph(100, 2.0, 10, 42).unwrap();

    let edges_a: Vec<_> = a.edges().map(|(u, e)| (u, e.destination, e.weight)).collect();
    let edges_b: Vec<_> = b.edges().map(|(u, e)| (u, e.destination, e.weight)).collect();
    assert_eq!(edges_a, edges_b);
    assert!(edges_a.iter().all(|&(u, v, w)| u != v && (1..=10).contains(&w)));
}

#[test]
fn test_grid_edge_count() {
    // 3x2 grid: 7 undirected neighbour pairs, stored in both directions
    let graph = generate_grid(3, 2, 1).unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 14);
}
