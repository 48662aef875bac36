use indexmap::IndexMap;
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Adjacency;
use crate::Result;

/// Distance and predecessor tables produced by one shortest path query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<K, W = f64>
where
    K: Eq + Hash,
{
    /// Distance from source to each vertex; `None` means not reached
    pub distances: IndexMap<K, Option<W>>,

    /// Predecessor of each vertex in the shortest path tree
    pub predecessors: IndexMap<K, Option<K>>,

    /// Source vertex key
    pub source: K,
}

impl<K, W> ShortestPathResult<K, W>
where
    K: Eq + Hash,
    W: Copy,
{
    /// Best known distance to `key`
    pub fn distance(&self, key: &K) -> Option<W> {
        self.distances.get(key).copied().flatten()
    }

    pub fn predecessor(&self, key: &K) -> Option<&K> {
        self.predecessors.get(key).and_then(|pred| pred.as_ref())
    }

    pub fn is_reachable(&self, key: &K) -> bool {
        self.distance(key).is_some()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug,
    G: Adjacency<K, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Walk the predecessor table back from `target` to the source.
    ///
    /// Returns the keys from source to target, or `None` when the walk runs out
    /// of predecessors before reaching the source.
    fn get_path(&self, result: &ShortestPathResult<K, W>, target: &K) -> Option<Vec<K>> {
        if !result.predecessors.contains_key(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        while *current != result.source {
            // A predecessor chain never revisits a vertex, so it is at most |V| long
            if path.len() >= result.predecessors.len() {
                log::warn!("predecessor chain from {:?} does not reach the source", target);
                return None;
            }

            path.push(current.clone());
            current = result.predecessor(current)?;
        }

        path.push(result.source.clone());
        path.reverse();

        Some(path)
    }
}
