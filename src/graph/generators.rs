use crate::graph::Graph;
use rand::Rng;

/// Generates a random DAG on vertices `0..n`.
///
/// Every pair `i < j` gets an edge `i -> j` with probability `edge_probability`
/// and a weight in `1.0..100.0`, so the identity order is always a valid
/// topological order.
pub fn generate_random_dag<R: Rng>(n: usize, edge_probability: f64, rng: &mut R) -> Graph<usize, (), f64> {
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );

    let mut graph = Graph::with_capacity(true, n);
    for v in 0..n {
        graph.add_vertex(v, ());
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1.0..100.0);
                graph.add_edge(i, (), j, (), weight);
            }
        }
    }

    graph
}

/// Generates a random graph on vertices `0..n` with about `edge_factor * n` edges.
/// Self-loops are skipped; parallel edges may occur.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    directed: bool,
    rng: &mut R,
) -> Graph<usize, (), f64> {
    let mut graph = Graph::with_capacity(directed, n);
    for v in 0..n {
        graph.add_vertex(v, ());
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(u, (), v, (), weight);
        }
    }

    graph
}

/// A directed path `0 -> 1 -> ... -> n-1` with unit weights
pub fn generate_chain(n: usize) -> Graph<usize, (), f64> {
    let mut graph = Graph::with_capacity(true, n);
    for v in 0..n {
        graph.add_vertex(v, ());
    }
    for v in 1..n {
        graph.add_edge(v - 1, (), v, (), 1.0);
    }
    graph
}

/// Undirected `width x height` grid with unit weights, vertex `(x, y)` keyed `y * width + x`
pub fn generate_grid(width: usize, height: usize) -> Graph<usize, (), f64> {
    let mut graph = Graph::with_capacity(false, width * height);
    for v in 0..(width * height) {
        graph.add_vertex(v, ());
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, (), vertex + 1, (), 1.0);
            }
            if y + 1 < height {
                graph.add_edge(vertex, (), vertex + width, (), 1.0);
            }
        }
    }

    graph
}
