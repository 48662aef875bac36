//! Depth-first topological ordering.
//!
//! Vertices are emitted in reverse DFS finish order, so for every edge `u -> v`
//! of an acyclic directed graph `u` comes before `v`. Cycles are not reported:
//! on a cyclic graph the result is still a permutation of all vertices, ordered
//! by finish time.

use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Adjacency;

/// Topological sorter using an explicit DFS stack
#[derive(Debug, Default, Clone, Copy)]
pub struct TopologicalSorter;

impl TopologicalSorter {
    pub fn new() -> Self {
        TopologicalSorter
    }

    /// Returns every key of `graph`, last-finished first.
    ///
    /// Roots are tried in enumeration order and neighbors in edge-list order, so
    /// the output matches a recursive DFS and is stable across calls.
    pub fn sort<K, W, G>(&self, graph: &G) -> Vec<K>
    where
        K: Eq + Hash + Clone + Debug,
        W: Float + Debug,
        G: Adjacency<K, W>,
    {
        self.finish_order(graph)
            .into_iter()
            .rev()
            .filter_map(|index| graph.key_at(index).cloned())
            .collect()
    }

    /// Vertex indices in DFS finish order
    fn finish_order<K, W, G>(&self, graph: &G) -> Vec<usize>
    where
        K: Eq + Hash + Clone + Debug,
        W: Float + Debug,
        G: Adjacency<K, W>,
    {
        let n = graph.vertex_count();
        let mut visited = vec![false; n];
        let mut finished = Vec::with_capacity(n);

        // (vertex, position of the next edge to examine)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (vertex, position) = *frame;
                let edges = graph.edges_at(vertex);

                if position < edges.len() {
                    frame.1 += 1;
                    if let Some(next) = graph.index_of(edges[position].target()) {
                        if !visited[next] {
                            visited[next] = true;
                            stack.push((next, 0));
                        }
                    }
                } else {
                    stack.pop();
                    finished.push(vertex);
                }
            }
        }

        log::trace!("topological sort finished {} vertices", finished.len());
        finished
    }
}
