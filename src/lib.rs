//! Keyed Graph - generic weighted graph with topological ordering and shortest paths
//!
//! Vertices are identified by arbitrary hashable keys and carry an opaque payload.
//! Graphs are directed or undirected, grow only by insertion, and support a
//! depth-first topological sort and a Dijkstra single-source shortest path query
//! with path reconstruction.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod snapshot;

pub use algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult, TopologicalSorter};
/// Re-export main types for convenient use
pub use graph::{AdjacencyStore, Edge, Graph};
pub use snapshot::GraphSnapshot;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex {0} does not exist")]
    UnknownVertex(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

impl Error {
    pub(crate) fn unknown<K: std::fmt::Debug>(key: &K) -> Self {
        Error::UnknownVertex(format!("{:?}", key))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
