use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed edge stored in the adjacency list of its source vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<W> {
    /// Vertex the edge points to
    pub destination: usize,

    /// Non-negative traversal cost
    pub weight: W,

    /// Display name; never consulted by the search
    pub label: Option<String>,
}

impl<W> Edge<W> {
    pub fn new(destination: usize, weight: W) -> Self {
        Edge {
            destination,
            weight,
            label: None,
        }
    }

    pub fn labeled(destination: usize, weight: W, label: impl Into<String>) -> Self {
        Edge {
            destination,
            weight,
            label: Some(label.into()),
        }
    }
}

/// A directed graph implementation using adjacency lists
///
/// The vertex count is fixed at construction and edges are append-only, so a
/// built graph can be shared read-only between any number of searches.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W> {
    /// Outgoing edges for each vertex, in the order they were added
    outgoing: Vec<Vec<Edge<W>>>,

    edge_count: usize,
}

impl<W: Weight> AdjacencyGraph<W> {
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        AdjacencyGraph {
            outgoing: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Adds a directed edge. The weight sign is not checked.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.push_edge(from, Edge::new(to, weight))
    }

    /// Adds a directed edge carrying a display label
    pub fn add_labeled_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: W,
        label: impl Into<String>,
    ) -> Result<()> {
        self.push_edge(from, Edge::labeled(to, weight, label))
    }

    fn push_edge(&mut self, from: usize, edge: Edge<W>) -> Result<()> {
        self.check_vertex(edge.destination)?;
        let n = self.outgoing.len();
        let edges = self.outgoing.get_mut(from).ok_or(Error::OutOfRange {
            vertex: from,
            vertex_count: n,
        })?;
        edges.push(edge);
        self.edge_count += 1;
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.outgoing.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.outgoing.len(),
            })
        }
    }

    /// Validate that the graph doesn't have negative weights.
    ///
    /// Reports the first offending edge in vertex order. Searches never call
    /// this; it is for callers that accept signed weights from outside.
    pub fn validate_non_negative(&self) -> Result<()> {
        for (from, edges) in self.outgoing.iter().enumerate() {
            if let Some(edge) = edges.iter().find(|e| e.weight < W::zero()) {
                return Err(Error::NegativeWeight {
                    from,
                    to: edge.destination,
                    weight: format!("{:?}", edge.weight),
                });
            }
        }
        Ok(())
    }

    /// Iterates over every edge as `(from, edge)` in vertex order
    pub fn edges(&self) -> impl Iterator<Item = (usize, &Edge<W>)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e)))
    }
}

impl<W: Weight> Graph<W> for AdjacencyGraph<W> {
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges_from(&self, vertex: usize) -> Result<&[Edge<W>]> {
        self.outgoing
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::OutOfRange {
                vertex,
                vertex_count: self.outgoing.len(),
            })
    }
}
