use serde::{Deserialize, Serialize};

use crate::graph::builder::GraphBuilder;
use crate::graph::named::NamedGraph;
use crate::{Error, Result};

/// A vertex-and-edge listing of a graph, as carried by JSON documents
///
/// Weights arrive as signed integers so that malformed inputs can be
/// rejected with a precise error instead of failing to parse; the typed
/// graph itself only ever holds unsigned weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDescription {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeDescription>,
}

/// A single directed edge in a graph description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

impl GraphDescription {
    /// Parses a description from a JSON document
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Validates the description and builds the graph it names
    ///
    /// A negative weight fails with [`Error::NegativeWeight`]; an edge
    /// endpoint missing from `vertices` fails with
    /// [`Error::UnknownVertex`].
    pub fn into_graph(self) -> Result<NamedGraph<u64>> {
        let mut builder = GraphBuilder::new();

        for name in self.vertices {
            builder = builder.vertex(name);
        }

        for edge in self.edges {
            if edge.weight < 0 {
                return Err(Error::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
            builder = builder.edge(edge.from, edge.to, edge.weight as u64);
        }

        builder.build()
    }
}
