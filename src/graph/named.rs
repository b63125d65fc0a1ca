use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A directed graph with string-named vertices, stored as adjacency lists
///
/// Vertex names are unique; the vertex set remembers insertion order.
/// Edge weights are non-negative by construction (`W` is unsigned).
#[derive(Debug, Clone)]
pub struct NamedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Vertex names in the order they were added
    vertices: Vec<String>,

    /// Outgoing edges for each vertex: name -> [(target, weight)]
    outgoing: HashMap<String, Vec<(String, W)>>,
}

impl<W> NamedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a graph containing the given vertices and no edges.
    /// Callers (the builder) are expected to have deduplicated the names.
    pub(crate) fn with_vertices(names: Vec<String>) -> Self {
        let outgoing = names
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        NamedGraph {
            vertices: names,
            outgoing,
        }
    }

    /// Inserts a directed edge between existing vertices. A repeated
    /// `(from, to)` pair replaces the previously stored weight.
    pub(crate) fn insert_edge(&mut self, from: String, to: String, weight: W) -> Result<()> {
        if !self.outgoing.contains_key(&from) {
            return Err(Error::UnknownVertex(from));
        }
        if !self.outgoing.contains_key(&to) {
            return Err(Error::UnknownVertex(to));
        }

        if let Some(edges) = self.outgoing.get_mut(&from) {
            match edges.iter().position(|(target, _)| *target == to) {
                Some(index) => edges[index].1 = weight,
                None => edges.push((to, weight)),
            }
        }

        Ok(())
    }
}

impl<W> Graph<W> for NamedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.vertices.iter().map(String::as_str))
    }

    fn contains_vertex(&self, name: &str) -> bool {
        self.outgoing.contains_key(name)
    }

    fn outgoing_edges(&self, from: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        if let Some(edges) = self.outgoing.get(from) {
            Box::new(edges.iter().map(|(target, weight)| (target.as_str(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        if let Some(edges) = self.outgoing.get(from) {
            edges
                .iter()
                .find(|(target, _)| target.as_str() == to)
                .map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}
