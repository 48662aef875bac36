use keyed_graph::algorithm::{Dijkstra, ShortestPathAlgorithm};
use keyed_graph::graph::generators::{generate_grid, generate_random_graph};
use keyed_graph::graph::{Adjacency, AdjacencyStore};
use keyed_graph::{Error, Graph};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Directed graph where the cheap route takes more hops
fn create_detour_graph() -> Graph<&'static str, ()> {
    let mut graph = Graph::new(true);
    graph.add_edge("S", (), "A", (), 1.0);
    graph.add_edge("A", (), "B", (), 1.0);
    graph.add_edge("S", (), "B", (), 5.0);
    graph.add_edge("B", (), "T", (), 1.0);
    graph
}

// Reference distances by repeated relaxation of every edge
fn bellman_ford(graph: &Graph<usize, (), f64>, source: usize) -> Vec<Option<f64>> {
    let n = graph.vertex_count();
    let mut distances = vec![None; n];
    distances[source] = Some(0.0);

    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            let Some(dist_u) = distances[u] else { continue };
            for edge in graph.neighbors(&u).unwrap() {
                let candidate = dist_u + edge.weight();
                let v = *edge.target();
                if distances[v].map_or(true, |d: f64| candidate < d) {
                    distances[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

#[test]
fn test_prefers_cheaper_longer_route() {
    let graph = create_detour_graph();

    let path = graph.shortest_path(&"S", &"T").unwrap();
    assert_eq!(path, Some(vec!["S", "A", "B", "T"]));

    let (_, cost) = graph.shortest_path_with_cost(&"S", &"T").unwrap().unwrap();
    assert_eq!(cost, 3.0);
}

#[test]
fn test_unreachable_target_has_no_path() {
    let mut graph = create_detour_graph();
    graph.add_vertex("island", ());

    assert_eq!(graph.shortest_path(&"S", &"island"), Ok(None));
    // Edges are one-way
    assert_eq!(graph.shortest_path(&"T", &"S"), Ok(None));
}

#[test]
fn test_path_to_self_is_single_vertex() {
    let graph = create_detour_graph();
    assert_eq!(graph.shortest_path(&"A", &"A"), Ok(Some(vec!["A"])));
    assert_eq!(
        graph.shortest_path_with_cost(&"A", &"A"),
        Ok(Some((vec!["A"], 0.0)))
    );
}

#[test]
fn test_unknown_endpoints_fail() {
    let graph = create_detour_graph();
    assert!(matches!(graph.shortest_path(&"X", &"T"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.shortest_path(&"S", &"X"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.shortest_path_tree(&"X"), Err(Error::UnknownVertex(_))));
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph = create_detour_graph();
    graph.add_edge("T", (), "A", (), -2.0);

    assert_eq!(graph.shortest_path(&"S", &"T"), Err(Error::NegativeWeight(-2.0)));
    // Insertion itself is unaffected
    assert_eq!(graph.edge_weight(&"T", &"A"), Ok(Some(-2.0)));
}

#[test]
fn test_undirected_path_uses_reverse_edges() {
    let mut graph: Graph<u32, ()> = Graph::new(false);
    graph.add_edge(1, (), 2, (), 6.0);
    graph.add_edge(2, (), 3, (), 1.0);
    graph.add_edge(11, (), 2, (), 12.0);
    graph.add_edge(3, (), 3, (), 1.0);

    assert_eq!(
        graph.shortest_path_with_cost(&1, &11),
        Ok(Some((vec![1, 2, 11], 18.0)))
    );
    assert_eq!(graph.shortest_path(&11, &3), Ok(Some(vec![11, 2, 3])));
}

#[test]
fn test_shortest_path_tree_tables() {
    let graph = create_detour_graph();
    let tree = graph.shortest_path_tree(&"S").unwrap();

    assert_eq!(tree.source, "S");
    assert_eq!(tree.distance(&"S"), Some(0.0));
    assert_eq!(tree.distance(&"A"), Some(1.0));
    assert_eq!(tree.distance(&"B"), Some(2.0));
    assert_eq!(tree.distance(&"T"), Some(3.0));
    assert_eq!(tree.predecessor(&"S"), None);
    assert_eq!(tree.predecessor(&"B"), Some(&"A"));
    assert_eq!(tree.predecessor(&"T"), Some(&"B"));

    let from_a = graph.shortest_path_tree(&"A").unwrap();
    assert!(!from_a.is_reachable(&"S"));
    assert_eq!(from_a.distances.len(), 4);
}

#[test]
fn test_repeated_queries_are_independent() {
    let graph = create_detour_graph();
    let first = graph.shortest_path_tree(&"S").unwrap();
    let _ = graph.shortest_path_tree(&"B").unwrap();
    let again = graph.shortest_path_tree(&"S").unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_path_finding_grid_uses_existing_edges() {
    let graph = generate_grid(10, 10);
    let (path, cost) = graph.shortest_path_with_cost(&0, &99).unwrap().unwrap();

    assert_eq!(path[0], 0, "Path should start at source");
    assert_eq!(path[path.len() - 1], 99, "Path should end at target");
    assert_eq!(path.len(), 19);
    assert_eq!(cost, 18.0);

    for i in 1..path.len() {
        assert!(
            graph.edge_weight(&path[i - 1], &path[i]).unwrap().is_some(),
            "Path should only use existing edges"
        );
    }
}

#[test]
fn test_dijkstra_matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);

    for directed in [true, false] {
        for _ in 0..10 {
            let graph = generate_random_graph(60, 2.0, directed, &mut rng);
            let tree = graph.shortest_path_tree(&0).unwrap();
            let expected = bellman_ford(&graph, 0);

            for v in 0..graph.vertex_count() {
                match (tree.distance(&v), expected[v]) {
                    (Some(got), Some(want)) => assert!((got - want).abs() < 1e-9),
                    (None, None) => {}
                    other => panic!("vertex {} disagrees: {:?}", v, other),
                }
            }
        }
    }
}

#[test]
fn test_early_exit_agrees_with_full_run() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_random_graph(80, 3.0, true, &mut rng);
    let store: &AdjacencyStore<usize, (), f64> = graph.adjacency();
    let full = Dijkstra::new().compute_shortest_paths(store, &0).unwrap();

    for target in 0..store.vertex_count() {
        let early = Dijkstra::new().with_early_exit(target);
        let partial = early.compute_shortest_paths(store, &0).unwrap();
        assert_eq!(partial.distance(&target), full.distance(&target));

        let path = <Dijkstra<usize> as ShortestPathAlgorithm<usize, f64, AdjacencyStore<usize, ()>>>::get_path(
            &early, &partial, &target,
        );
        assert_eq!(path.is_some(), full.is_reachable(&target));
        if let Some(path) = path {
            let total: f64 = path
                .windows(2)
                .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap().unwrap())
                .sum();
            assert!(total >= full.distance(&target).unwrap() - 1e-9);
        }
    }
}

#[test]
fn test_algorithm_name() {
    let graph = create_detour_graph();
    let dijkstra = Dijkstra::new();
    let name = <Dijkstra<&str> as ShortestPathAlgorithm<&str, f64, AdjacencyStore<&str, ()>>>::name(&dijkstra);
    assert_eq!(name, "Dijkstra");
    assert!(dijkstra.compute_shortest_paths(graph.adjacency(), &"S").is_ok());
}
