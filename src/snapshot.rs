use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::graph::{Adjacency, Edge};

/// One vertex and its outgoing edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSnapshot<K, W = f64>
where
    W: Float + Debug,
{
    pub key: K,
    pub edges: Vec<Edge<K, W>>,
}

/// Read-only copy of a graph's structure, for dumping and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<K, W = f64>
where
    W: Float + Debug,
{
    pub directed: bool,
    pub vertices: Vec<VertexSnapshot<K, W>>,
}

impl<K, W> GraphSnapshot<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Copies every vertex and edge list in enumeration order
    pub fn from_adjacency<G: Adjacency<K, W>>(graph: &G) -> Self {
        let vertices = (0..graph.vertex_count())
            .filter_map(|index| {
                graph.key_at(index).map(|key| VertexSnapshot {
                    key: key.clone(),
                    edges: graph.edges_at(index).to_vec(),
                })
            })
            .collect();

        GraphSnapshot {
            directed: graph.is_directed(),
            vertices,
        }
    }
}

impl<K, W> GraphSnapshot<K, W>
where
    K: Serialize,
    W: Float + Debug + Serialize,
{
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<K, W> Display for GraphSnapshot<K, W>
where
    K: Debug,
    W: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "{:?}:", vertex.key)?;
            for edge in &vertex.edges {
                writeln!(f, "\t{:?}, {:?}", edge.target(), edge.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
