use keyed_graph::Graph;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Undirected sample graph with a self-loop and a dangling vertex
    let mut graph: Graph<u32, String> = Graph::default();
    let edges = [
        (1, 2, 6.0),
        (2, 3, 1.0),
        (3, 4, 7.0),
        (3, 5, 11.0),
        (3, 6, 66.0),
        (4, 9, 11.0),
        (9, 7, 1.0),
        (11, 2, 12.0),
        (3, 3, 1.0),
        (4, 44, 1.0),
    ];
    for (a, b, weight) in edges {
        graph.add_edge(a, format!("v{}", a), b, format!("v{}", b), weight);
    }

    println!("{}", graph);

    match graph.shortest_path_with_cost(&1, &11)? {
        Some((path, cost)) => println!("Shortest path 1 -> 11: {:?} (cost {})", path, cost),
        None => println!("No path from 1 to 11"),
    }
    println!("Breadth first from 1: {:?}", graph.breadth_first(&1)?);
    println!("{}", graph.snapshot().to_json_pretty()?);

    Ok(())
}
