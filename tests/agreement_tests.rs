use proptest::prelude::*;
use shortest_paths::algorithm::traits::ShortestPathAlgorithm;
use shortest_paths::graph::generators::{generate_negative_weight_graph, generate_random_graph};
use shortest_paths::graph::{Graph, GraphType};
use shortest_paths::{BellmanFord, FloydWarshall, Johnson, KShortestSimplePaths};

const EPSILON: f64 = 1e-6;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn dense_and_reweighting_engines_agree(n in 2usize..12, factor in 1.0f64..4.0, seed in any::<u64>()) {
        let graph = generate_negative_weight_graph(n, factor, seed);
        let dense = FloydWarshall::new(&graph);
        let reweighting = Johnson::with_default_factory(&graph);

        prop_assert!(!dense.has_negative_cycle());
        for u in graph.vertices() {
            for v in graph.vertices() {
                let a = dense.distance(u, v).unwrap();
                let b = reweighting.distance(u, v).unwrap();
                if a.is_infinite() {
                    prop_assert!(b.is_infinite());
                } else {
                    prop_assert!((a - b).abs() < EPSILON, "{} -> {}: {} vs {}", u, v, a, b);
                }
            }
        }
    }

    #[test]
    fn path_weight_equals_distance(n in 2usize..10, factor in 1.0f64..3.0, seed in any::<u64>()) {
        let graph = generate_negative_weight_graph(n, factor, seed);
        let reweighting = Johnson::with_default_factory(&graph);
        let dense = FloydWarshall::new(&graph);

        for u in graph.vertices() {
            for v in graph.vertices() {
                let distance = reweighting.distance(u, v).unwrap();
                match reweighting.path(u, v).unwrap() {
                    Some(path) => {
                        prop_assert!((path.weight() - distance).abs() < EPSILON);
                        prop_assert_eq!(path.start_vertex(), u);
                        prop_assert_eq!(path.end_vertex(), v);
                    }
                    None => prop_assert!(distance.is_infinite()),
                }
                match dense.path(u, v).unwrap() {
                    Some(path) => prop_assert!((path.weight() - dense.distance(u, v).unwrap()).abs() < EPSILON),
                    None => prop_assert!(dense.distance(u, v).unwrap().is_infinite()),
                }
            }
        }
    }

    #[test]
    fn reweighting_matches_bellman_ford(n in 2usize..10, factor in 1.0f64..3.0, seed in any::<u64>()) {
        let graph = generate_negative_weight_graph(n, factor, seed);
        let engine = Johnson::with_default_factory(&graph);
        let bellman_ford = BellmanFord::new();

        for u in graph.vertices() {
            let tree = bellman_ford.compute_shortest_paths(&graph, u).unwrap();
            for v in graph.vertices() {
                let expected = tree.distance(v).unwrap_or(f64::INFINITY);
                let actual = engine.distance(u, v).unwrap();
                prop_assert!(expected == actual || (expected - actual).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn k_shortest_first_path_is_a_shortest_path(n in 3usize..8, seed in any::<u64>()) {
        let graph = generate_random_graph(GraphType::Mixed, n, 2.5, 1.0, 10.0, seed);
        let dense = FloydWarshall::new(&graph);
        let ranking = KShortestSimplePaths::new(&graph);

        let paths = ranking.paths(0, n - 1, 4).unwrap();
        let distance = dense.distance(0, n - 1).unwrap();
        if distance.is_infinite() {
            prop_assert!(paths.is_empty());
        } else {
            prop_assert!(!paths.is_empty());
            prop_assert!((paths[0].weight() - distance).abs() < EPSILON);
        }
        for pair in paths.windows(2) {
            prop_assert!(pair[0].weight() <= pair[1].weight());
        }
        for path in &paths {
            prop_assert!(path.is_simple());
        }
    }
}
