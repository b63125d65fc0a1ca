use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::graph::named::NamedGraph;
use crate::Result;

/// Assembles a [`NamedGraph`] from vertex names and weighted edge triples
///
/// Vertices are registered by name; re-adding an existing name is a no-op.
/// Edges may be declared in any order relative to their endpoints, but
/// [`build`](GraphBuilder::build) fails with
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if an endpoint
/// never gets registered.
#[derive(Debug)]
pub struct GraphBuilder<W>
where
    W: PrimInt + Unsigned + Debug,
{
    vertices: Vec<String>,
    edges: Vec<(String, String, W)>,
}

impl<W> GraphBuilder<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        GraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Registers a vertex with the given name
    pub fn vertex(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.vertices.contains(&name) {
            self.vertices.push(name);
        }
        self
    }

    /// Records a directed edge `from -> to` with the given weight
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: W) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    /// Validates the recorded edges against the vertex set and produces
    /// the graph
    pub fn build(self) -> Result<NamedGraph<W>> {
        let mut graph = NamedGraph::with_vertices(self.vertices);
        for (from, to, weight) in self.edges {
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<W> Default for GraphBuilder<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn default() -> Self {
        GraphBuilder::new()
    }
}
