use indexmap::map::Entry;
use indexmap::IndexMap;
use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::traits::{Adjacency, MutableAdjacency};
use crate::graph::Edge;

#[derive(Debug, Clone)]
struct Slot<K, V, W>
where
    W: Float + Debug,
{
    payload: V,
    edges: Vec<Edge<K, W>>,
}

/// Vertex set and per-vertex edge lists, kept in one insertion-ordered map so
/// every key always has both a payload and an edge list.
#[derive(Debug, Clone)]
pub struct AdjacencyStore<K, V, W = f64>
where
    W: Float + Debug,
{
    directed: bool,

    /// key -> payload and outgoing edges, in insertion order
    slots: IndexMap<K, Slot<K, V, W>>,

    /// Total stored edges across all lists
    edge_count: usize,
}

impl<K, V, W> AdjacencyStore<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty store
    pub fn new(directed: bool) -> Self {
        AdjacencyStore {
            directed,
            slots: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new store with room for `vertices` keys
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        AdjacencyStore {
            directed,
            slots: IndexMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Payload stored for `key`
    pub fn payload(&self, key: &K) -> Option<&V> {
        self.slots.get(key).map(|slot| &slot.payload)
    }

    /// Iterates `(key, payload)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.slots.iter().map(|(key, slot)| (key, &slot.payload))
    }

    /// Index of `key`, inserting it first if absent
    fn ensure_vertex(&mut self, key: K, payload: V) -> usize {
        match self.slots.entry(key) {
            Entry::Occupied(entry) => entry.index(),
            Entry::Vacant(entry) => {
                let index = entry.index();
                entry.insert(Slot {
                    payload,
                    edges: Vec::new(),
                });
                index
            }
        }
    }
}

impl<K, V, W> Adjacency<K, W> for AdjacencyStore<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn index_of(&self, key: &K) -> Option<usize> {
        self.slots.get_index_of(key)
    }

    fn key_at(&self, index: usize) -> Option<&K> {
        self.slots.get_index(index).map(|(key, _)| key)
    }

    fn edges_at(&self, index: usize) -> &[Edge<K, W>] {
        match self.slots.get_index(index) {
            Some((_, slot)) => &slot.edges,
            None => &[],
        }
    }
}

impl<K, V, W> MutableAdjacency<K, V, W> for AdjacencyStore<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, key: K, payload: V) -> bool {
        match self.slots.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Slot {
                    payload,
                    edges: Vec::new(),
                });
                true
            }
        }
    }

    fn add_edge(&mut self, key_a: K, payload_a: V, key_b: K, payload_b: V, weight: W) {
        let forward = Edge::new(key_b.clone(), weight);
        let backward = (!self.directed).then(|| Edge::new(key_a.clone(), weight));

        let from = self.ensure_vertex(key_a, payload_a);
        let to = self.ensure_vertex(key_b, payload_b);

        self.slots[from].edges.push(forward);
        self.edge_count += 1;

        if let Some(backward) = backward {
            self.slots[to].edges.push(backward);
            self.edge_count += 1;
        }
    }
}
