use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A weighted edge pointing at the vertex identified by `target`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<K, W = f64>
where
    W: Float + Debug,
{
    target: K,
    weight: W,
}

impl<K, W> Edge<K, W>
where
    W: Float + Debug,
{
    pub fn new(target: K, weight: W) -> Self {
        Edge { target, weight }
    }

    /// Key of the destination vertex
    pub fn target(&self) -> &K {
        &self.target
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}
