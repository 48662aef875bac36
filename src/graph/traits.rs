use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Edge;
use crate::{Error, Result};

/// Read-only view of a keyed adjacency structure.
///
/// Vertices are addressed either by key or by their dense enumeration index
/// (`0..vertex_count()`, insertion order). Algorithms work on indices and map
/// back to keys only when producing results.
pub trait Adjacency<K, W = f64>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Returns true if inserted edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored edges; an undirected edge counts twice
    fn edge_count(&self) -> usize;

    /// Enumeration index of a key
    fn index_of(&self, key: &K) -> Option<usize>;

    /// Key stored at an enumeration index
    fn key_at(&self, index: usize) -> Option<&K>;

    /// Outgoing edges of the vertex at `index`, in insertion order.
    /// An index outside the graph has no edges.
    fn edges_at(&self, index: usize) -> &[Edge<K, W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Returns the ordered edge list of `key`
    fn neighbors(&self, key: &K) -> Result<&[Edge<K, W>]> {
        let index = self.index_of(key).ok_or_else(|| Error::unknown(key))?;
        Ok(self.edges_at(index))
    }

    /// Returns an iterator over all keys in enumeration order
    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new((0..self.vertex_count()).filter_map(move |index| self.key_at(index)))
    }

    /// Gets the weight of the first `from -> to` edge if it exists
    fn get_edge_weight(&self, from: &K, to: &K) -> Result<Option<W>> {
        if !self.has_vertex(to) {
            return Err(Error::unknown(to));
        }
        Ok(self
            .neighbors(from)?
            .iter()
            .find(|edge| edge.target() == to)
            .map(|edge| edge.weight()))
    }
}

/// Additive mutation of a keyed graph. There is no removal.
pub trait MutableAdjacency<K, V, W = f64>: Adjacency<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Inserts `key` with `payload` and an empty edge list.
    /// Returns false and discards `payload` if the key is already present.
    fn add_vertex(&mut self, key: K, payload: V) -> bool;

    /// Appends `key_a -> key_b` (and `key_b -> key_a` when undirected), inserting
    /// either endpoint with its payload if it is missing. Parallel edges are kept.
    fn add_edge(&mut self, key_a: K, payload_a: V, key_b: K, payload_b: V, weight: W);
}
