//! Single-source shortest paths over small named directed graphs.
//!
//! This library implements classic Dijkstra's algorithm on static graphs
//! whose vertices are identified by name and whose edge weights are
//! non-negative integers. A solve produces a distance table covering every
//! vertex (unreachable vertices keep an infinity sentinel) and a partial
//! predecessor table from which shortest paths can be reconstructed.
//!
//! Graphs are assembled once through [`GraphBuilder`] (or parsed from a
//! JSON description) and are immutable afterwards, so a single graph can
//! be solved any number of times.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
/// Re-export main types for convenient use
pub use graph::{Graph, GraphBuilder, NamedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("source vertex `{0}` not found in graph")]
    SourceNotFound(String),

    #[error("edge endpoint `{0}` is not a vertex of the graph")]
    UnknownVertex(String),

    #[error("negative weight {weight} on edge `{from}` -> `{to}`")]
    NegativeWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("malformed graph description: {0}")]
    Description(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
