use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

/// Trait representing a weighted directed graph with named vertices
///
/// The view is read-only: graphs are assembled through
/// [`GraphBuilder`](crate::graph::GraphBuilder) and never change
/// afterwards, which keeps them reusable across any number of solves.
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertex names in insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns true if a vertex with the given name exists in the graph
    fn contains_vertex(&self, name: &str) -> bool;

    /// Returns an iterator over the outgoing edges of a vertex as
    /// `(target, weight)` pairs; empty for unknown vertices
    fn outgoing_edges(&self, from: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &str, to: &str) -> Option<W>;
}
