use std::collections::BTreeMap;
use std::fmt::Debug;

use log::warn;
use num_traits::{PrimInt, Unsigned};

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path computation
///
/// The distance table covers every vertex of the graph; vertices the
/// source cannot reach keep the `W::max_value()` infinity sentinel. The
/// predecessor table is partial: the source and unreachable vertices have
/// no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// The vertex the distances are measured from
    pub source: String,

    /// Best-known distance from the source to each vertex
    pub distances: BTreeMap<String, W>,

    /// For each improved vertex, the vertex its best distance came through
    pub predecessors: BTreeMap<String, String>,
}

impl<W> ShortestPaths<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns true if the source reaches the given vertex
    pub fn is_reachable(&self, vertex: &str) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |&distance| distance < W::max_value())
    }

    /// Reconstructs the path from the source to `target` by walking the
    /// predecessor table backwards
    ///
    /// Returns `None` for the unreachable and for vertices the graph does
    /// not contain.
    pub fn path_to<'a>(&'a self, target: &'a str) -> Option<Vec<&'a str>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        while current != self.source {
            path.push(current);
            current = self.predecessors.get(current).map(String::as_str)?;

            // A predecessor table of a finished solve cannot loop, but a
            // hand-assembled one can; bail out once the walk is longer
            // than the vertex set.
            if path.len() > self.distances.len() {
                warn!("predecessor walk from `{}` exceeds vertex count", target);
                return None;
            }
        }

        path.push(self.source.as_str());
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPaths<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
