use std::env;
use std::time::{Duration, Instant};

use keyed_graph::graph::generators::{generate_random_dag, generate_random_graph};
use keyed_graph::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark settings, from `benchmark [edge_factor] [seed]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    graph_sizes: Vec<usize>,
    edge_factor: f64,
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            graph_sizes: vec![1_000, 10_000, 50_000, 100_000],
            edge_factor: 2.0,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let defaults = BenchmarkConfig::default();
        BenchmarkConfig {
            edge_factor: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.edge_factor),
            seed: args.get(2).and_then(|a| a.parse().ok()).unwrap_or(defaults.seed),
            ..defaults
        }
    }
}

// Times a single shortest path query and reports how many vertices it reached
fn benchmark_dijkstra(graph: &Graph<usize, (), f64>, source: usize) -> Duration {
    let start = Instant::now();
    let result = graph.shortest_path_tree(&source);
    let duration = start.elapsed();

    match result {
        Ok(tree) => {
            let reachable = tree.distances.values().filter(|d| d.is_some()).count();
            println!("  - Dijkstra reached {} vertices in {:?}", reachable, duration);
        }
        Err(e) => println!("  - Dijkstra failed: {}", e),
    }

    duration
}

fn benchmark_topological(graph: &Graph<usize, (), f64>) -> Duration {
    let start = Instant::now();
    let order = graph.topological_sort();
    let duration = start.elapsed();
    println!("  - Topological sort of {} vertices in {:?}", order.len(), duration);
    duration
}

fn main() {
    env_logger::init();

    let config = BenchmarkConfig::from_args();
    let mut rng = StdRng::seed_from_u64(config.seed);

    println!("=====================================================");
    println!("Benchmark: Dijkstra and topological sort");
    println!("Edge factor: {} edges per vertex (on average)", config.edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &config.graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, config.edge_factor, true, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
        let dijkstra_time = benchmark_dijkstra(&graph, 0);

        // Keep the DAG density comparable to the random graph
        let probability = (2.0 * config.edge_factor / size as f64).min(1.0);
        let dag = generate_random_dag(size, probability, &mut rng);
        println!("DAG has {} vertices and {} edges", dag.vertex_count(), dag.edge_count());
        let topo_time = benchmark_topological(&dag);

        results.push((size, dijkstra_time, topo_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Dijkstra (ms)", "Toposort (ms)");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, topo_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15}",
            size,
            dijkstra_time.as_millis(),
            topo_time.as_millis()
        );
    }
}
