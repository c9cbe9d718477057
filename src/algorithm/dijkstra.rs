use log::{debug, trace};
use rayon::prelude::*;

use crate::algorithm::{DistanceTable, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{new_frontier, FrontierEntry, VisitedSet};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion frontier
///
/// Improved tentative distances are pushed as fresh frontier entries instead of
/// decreasing a key in place. An entry whose vertex is already finalized when
/// it reaches the top of the heap is stale and gets skipped, so the frontier
/// holds at most one entry per successful relaxation.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Reject negative edge weights as they are encountered
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            check_weights: false,
        }
    }

    /// Fail with `NegativeWeight` on the first negative edge leaving a
    /// finalized vertex, including edges into vertices that are already final.
    /// Off by default.
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.check_weights = enabled;
        self
    }

    /// Runs one independent search per source in parallel.
    ///
    /// Results come back in the order of `sources`. Every source is checked
    /// before any search starts.
    pub fn compute_from_sources<W, G>(
        &self,
        graph: &G,
        sources: &[usize],
    ) -> Result<Vec<ShortestPathResult<W>>>
    where
        W: Weight + Send + Sync,
        G: Graph<W> + Sync,
    {
        if let Some(&source) = sources.iter().find(|&&s| !graph.has_vertex(s)) {
            return Err(Error::OutOfRange {
                vertex: source,
                vertex_count: graph.vertex_count(),
            });
        }

        sources
            .par_iter()
            .map(|&source| self.search(graph, source))
            .collect()
    }

    fn search<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::OutOfRange {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances = DistanceTable::seeded(n, source);
        let mut visited = VisitedSet::new(n);
        let mut frontier = new_frontier::<W>();
        let mut stats = SearchStats::default();

        frontier.push(FrontierEntry::new(source, W::zero()));
        stats.pushes += 1;

        while !frontier.is_empty() {
            let FrontierEntry {
                vertex: u,
                distance: dist_u,
            } = frontier.pop_min()?;

            if !visited.insert(u) {
                stats.stale_skipped += 1;
                continue;
            }
            stats.finalized += 1;
            trace!("Finalized vertex {} at distance {:?}", u, dist_u);

            for edge in graph.edges_from(u)? {
                let v = edge.destination;
                if self.check_weights && edge.weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: u,
                        to: v,
                        weight: format!("{:?}", edge.weight),
                    });
                }
                if visited.contains(v) {
                    continue;
                }

                let new_dist = dist_u
                    .checked_sum(edge.weight)
                    .ok_or(Error::DistanceOverflow { from: u, to: v })?;
                let should_update = match distances.get(v) {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    trace!(
                        "Relaxed {} -> {}: {:?} replaced by {:?}",
                        u,
                        v,
                        distances.get(v),
                        new_dist
                    );
                    distances.set(v, new_dist);
                    frontier.push(FrontierEntry::new(v, new_dist));
                    stats.pushes += 1;
                    stats.relaxations += 1;
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} of {} vertices reached, {} pushes, {} stale entries skipped",
            source, stats.finalized, n, stats.pushes, stats.stale_skipped
        );

        Ok(ShortestPathResult {
            source,
            distances,
            stats,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.search(graph, source)
    }
}
