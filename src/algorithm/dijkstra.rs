use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// All working state (tentative distances, predecessors, the visited set,
/// the frontier queue) is scoped to a single call, so one graph can be
/// solved repeatedly or from several sources without any reset step.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPaths<W>> {
        if !graph.contains_vertex(source) {
            return Err(Error::SourceNotFound(source.to_owned()));
        }

        debug!(
            "solving shortest paths from `{}` over {} vertices and {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        // Every vertex starts at the infinity sentinel; only the source is
        // known at distance zero.
        let mut distances: BTreeMap<String, W> = graph
            .vertices()
            .map(|vertex| (vertex.to_owned(), W::max_value()))
            .collect();
        distances.insert(source.to_owned(), W::zero());

        let mut predecessors: BTreeMap<String, String> = BTreeMap::new();
        let mut visited: HashSet<String> = HashSet::with_capacity(graph.vertex_count());

        let mut queue = MinQueue::new();
        queue.push(source.to_owned(), W::zero());

        // Main Dijkstra loop. The queue holds every vertex whose tentative
        // distance has improved at least once; vertices the source never
        // reaches are never enqueued and keep the sentinel.
        while let Some((u, dist_u)) = queue.pop() {
            // Re-pushing on improvement leaves stale entries behind; the
            // first pop of a vertex carries its final distance.
            if !visited.insert(u.clone()) {
                continue;
            }

            // Relax all outgoing edges. A visited target is final and can
            // no longer improve.
            for (v, weight) in graph.outgoing_edges(&u) {
                if visited.contains(v) {
                    continue;
                }

                let candidate = dist_u.saturating_add(weight);
                if candidate < distances[v] {
                    trace!(
                        "relaxed `{}` -> `{}`: {:?} down to {:?}",
                        u,
                        v,
                        distances[v],
                        candidate
                    );
                    distances.insert(v.to_owned(), candidate);
                    predecessors.insert(v.to_owned(), u.clone());
                    queue.push(v.to_owned(), candidate);
                }
            }
        }

        Ok(ShortestPaths {
            source: source.to_owned(),
            distances,
            predecessors,
        })
    }
}
