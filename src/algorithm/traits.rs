use std::ops::Index;

use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Shortest distance from the source to each vertex.
///
/// `None` marks a vertex with no directed path from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable<W> {
    distances: Vec<Option<W>>,
}

impl<W: Weight> DistanceTable<W> {
    /// A table of `vertex_count` entries with only `source` reachable at zero.
    /// `source` must already be range-checked.
    pub(crate) fn seeded(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(W::zero());
        DistanceTable { distances }
    }

    /// Distance to `vertex`, `None` if unreachable or out of range
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub(crate) fn set(&mut self, vertex: usize, distance: W) {
        self.distances[vertex] = Some(distance);
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<W>> + '_ {
        self.distances.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn into_vec(self) -> Vec<Option<W>> {
        self.distances
    }
}

impl<W> Index<usize> for DistanceTable<W> {
    type Output = Option<W>;

    fn index(&self, vertex: usize) -> &Self::Output {
        &self.distances[vertex]
    }
}

/// Counters collected over a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, including the source
    pub pushes: usize,

    /// Popped entries discarded because their vertex was already finalized
    pub stale_skipped: usize,

    /// Vertices whose distance was finalized
    pub finalized: usize,

    /// Edges that improved a tentative distance
    pub relaxations: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W> {
    /// Source vertex ID
    pub source: usize,

    /// Distances from source to each vertex
    pub distances: DistanceTable<W>,

    #[serde(skip)]
    pub stats: SearchStats,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest distances from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
