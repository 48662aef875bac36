use std::fmt::Debug;
use std::hash::Hash;
use indexmap::IndexMap;
use num_traits::{Float, ToPrimitive, Zero};

use crate::graph::Adjacency;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a keyed adjacency structure.
///
/// Uses a lazy-deletion priority queue: a vertex may be queued several times,
/// but only its first extraction settles it and relaxes its edges.
#[derive(Debug, Clone)]
pub struct Dijkstra<K> {
    /// Stop as soon as this vertex is settled
    stop_at: Option<K>,
}

impl<K> Default for Dijkstra<K> {
    fn default() -> Self {
        Dijkstra { stop_at: None }
    }
}

impl<K> Dijkstra<K> {
    /// Creates a new Dijkstra algorithm instance that settles every reachable vertex
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop once `target` is settled.
    ///
    /// The target's distance and predecessor chain are final at that point;
    /// entries for vertices not yet settled are only upper bounds.
    pub fn with_early_exit(mut self, target: K) -> Self {
        self.stop_at = Some(target);
        self
    }
}

/// Rejects any negative or NaN edge weight
fn validate_weights<K, W, G>(graph: &G) -> Result<()>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Adjacency<K, W>,
{
    for index in 0..graph.vertex_count() {
        for edge in graph.edges_at(index) {
            let weight = edge.weight();
            if weight.is_nan() || weight < W::zero() {
                return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }
        }
    }
    Ok(())
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra<K>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug,
    G: Adjacency<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>> {
        let source_index = graph.index_of(source).ok_or_else(|| Error::unknown(source))?;
        let stop_index = match &self.stop_at {
            Some(target) => Some(graph.index_of(target).ok_or_else(|| Error::unknown(target))?),
            None => None,
        };
        validate_weights(graph)?;

        let n = graph.vertex_count();
        log::debug!("dijkstra from {:?} over {} vertices", source, n);

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut relaxations = 0usize;

        distances[source_index] = Some(W::zero());

        let mut queue = DistanceQueue::new();
        queue.push(source_index, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry for an already settled vertex
            if settled[u] {
                continue;
            }
            settled[u] = true;

            if stop_index == Some(u) {
                log::trace!("target {:?} settled, stopping early", self.stop_at);
                break;
            }

            for edge in graph.edges_at(u) {
                let Some(v) = graph.index_of(edge.target()) else {
                    continue;
                };
                if settled[v] {
                    continue;
                }

                let new_dist = dist_u + edge.weight();
                let improves = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if improves {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                    relaxations += 1;
                }
            }
        }

        log::debug!(
            "dijkstra from {:?}: {} relaxations, {} vertices settled",
            source,
            relaxations,
            settled.iter().filter(|s| **s).count()
        );

        let mut distance_table = IndexMap::with_capacity(n);
        let mut predecessor_table = IndexMap::with_capacity(n);
        for (index, key) in graph.keys().enumerate() {
            distance_table.insert(key.clone(), distances[index]);
            let pred = predecessors[index].and_then(|p| graph.key_at(p)).cloned();
            predecessor_table.insert(key.clone(), pred);
        }

        Ok(ShortestPathResult {
            distances: distance_table,
            predecessors: predecessor_table,
            source: source.clone(),
        })
    }
}
