use num_traits::Float;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::topological::TopologicalSorter;
use crate::algorithm::traversal::breadth_first;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::{Adjacency, MutableAdjacency};
use crate::graph::{AdjacencyStore, Edge};
use crate::snapshot::GraphSnapshot;
use crate::{Error, Result};

/// A weighted graph over arbitrary keys with opaque per-vertex payloads.
///
/// The graph only grows: vertices and edges can be inserted but never removed.
/// Every query builds its own working tables, so nothing is retained between
/// calls and repeated queries on an unmodified graph give identical answers.
///
/// ```
/// use keyed_graph::Graph;
///
/// let mut graph = Graph::new(true);
/// graph.add_edge("s", (), "a", (), 1.0);
/// graph.add_edge("a", (), "t", (), 2.0);
/// graph.add_edge("s", (), "t", (), 5.0);
///
/// let path = graph.shortest_path(&"s", &"t").unwrap();
/// assert_eq!(path, Some(vec!["s", "a", "t"]));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K, V, W = f64>
where
    W: Float + Debug,
{
    store: AdjacencyStore<K, V, W>,
}

impl<K, V, W> Default for Graph<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// An empty undirected graph
    fn default() -> Self {
        Graph::new(false)
    }
}

impl<K, V, W> Graph<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            store: AdjacencyStore::new(directed),
        }
    }

    /// Creates a new empty graph with room for `vertices` keys
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Graph {
            store: AdjacencyStore::with_capacity(directed, vertices),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.store.is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    /// Number of stored edges; each undirected insertion stores two
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.store.has_vertex(key)
    }

    /// Payload stored for `key`
    pub fn vertex(&self, key: &K) -> Option<&V> {
        self.store.payload(key)
    }

    /// `(key, payload)` pairs in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.store.iter()
    }

    /// The underlying adjacency structure, for running algorithms directly
    pub fn adjacency(&self) -> &AdjacencyStore<K, V, W> {
        &self.store
    }

    /// Inserts a vertex. The first payload for a key wins; later ones are dropped
    /// and `false` is returned.
    pub fn add_vertex(&mut self, key: K, payload: V) -> bool {
        self.store.add_vertex(key, payload)
    }

    /// Inserts an edge `key_a -> key_b`, plus `key_b -> key_a` when undirected.
    /// Missing endpoints are inserted with the given payloads.
    pub fn add_edge(&mut self, key_a: K, payload_a: V, key_b: K, payload_b: V, weight: W) {
        self.store.add_edge(key_a, payload_a, key_b, payload_b, weight)
    }

    /// Outgoing edges of `key` in insertion order
    pub fn neighbors(&self, key: &K) -> Result<&[Edge<K, W>]> {
        self.store.neighbors(key)
    }

    /// Weight of the first `from -> to` edge, if any
    pub fn edge_weight(&self, from: &K, to: &K) -> Result<Option<W>> {
        self.store.get_edge_weight(from, to)
    }

    /// All keys, ordered so that every edge points forward when the graph is a DAG
    pub fn topological_sort(&self) -> Vec<K> {
        TopologicalSorter::new().sort(&self.store)
    }

    /// Keys reachable from `start`, breadth first
    pub fn breadth_first(&self, start: &K) -> Result<Vec<K>> {
        breadth_first(&self.store, start)
    }

    /// Distance and predecessor tables for every vertex from `from`
    pub fn shortest_path_tree(&self, from: &K) -> Result<ShortestPathResult<K, W>> {
        Dijkstra::new().compute_shortest_paths(&self.store, from)
    }

    /// Minimum-weight path from `from` to `to`, both ends included.
    ///
    /// Returns `Ok(None)` when `to` is unreachable, and `[from]` when the two
    /// keys are equal.
    pub fn shortest_path(&self, from: &K, to: &K) -> Result<Option<Vec<K>>> {
        Ok(self.shortest_path_with_cost(from, to)?.map(|(path, _)| path))
    }

    /// Like [`Graph::shortest_path`], also returning the total weight
    pub fn shortest_path_with_cost(&self, from: &K, to: &K) -> Result<Option<(Vec<K>, W)>> {
        if !self.contains_vertex(to) {
            return Err(Error::unknown(to));
        }

        let dijkstra = Dijkstra::new().with_early_exit(to.clone());
        let result = dijkstra.compute_shortest_paths(&self.store, from)?;

        let Some(cost) = result.distance(to) else {
            return Ok(None);
        };
        let path = <Dijkstra<K> as ShortestPathAlgorithm<K, W, AdjacencyStore<K, V, W>>>::get_path(
            &dijkstra, &result, to,
        );

        Ok(path.map(|path| (path, cost)))
    }

    /// Serializable copy of the structure, payloads excluded
    pub fn snapshot(&self) -> GraphSnapshot<K, W> {
        GraphSnapshot::from_adjacency(&self.store)
    }
}

impl<K, V, W> Display for Graph<K, V, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.snapshot(), f)
    }
}
