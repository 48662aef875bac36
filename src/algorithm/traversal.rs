use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Adjacency;
use crate::{Error, Result};

/// Keys reachable from `start` in breadth-first order, `start` first.
/// Each vertex appears once; edge weights are ignored.
pub fn breadth_first<K, W, G>(graph: &G, start: &K) -> Result<Vec<K>>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Adjacency<K, W>,
{
    let start_index = graph.index_of(start).ok_or_else(|| Error::unknown(start))?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start_index] = true;
    queue.push_back(start_index);

    while let Some(vertex) = queue.pop_front() {
        if let Some(key) = graph.key_at(vertex) {
            order.push(key.clone());
        }
        for edge in graph.edges_at(vertex) {
            if let Some(next) = graph.index_of(edge.target()) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    Ok(order)
}
