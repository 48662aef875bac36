pub mod traits;
pub mod dijkstra;
pub mod topological;
pub mod traversal;

pub use dijkstra::Dijkstra;
pub use topological::TopologicalSorter;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
