pub mod edge;
pub mod traits;
pub mod store;
pub mod weighted;
pub mod generators;

pub use edge::Edge;
pub use traits::{Adjacency, MutableAdjacency};
pub use store::AdjacencyStore;
pub use weighted::Graph;
