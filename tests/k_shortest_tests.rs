use shortest_paths::graph::{Edge, GraphType, MutableGraph, WeightedGraph};
use shortest_paths::{Error, GraphPath, KShortestSimplePaths};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const S: usize = 0;
const A: usize = 1;
const B: usize = 2;
const T: usize = 3;

/// Diamond s -> {a, b} -> t with a cross edge a -> b and a heavy direct edge
fn diamond_with_shortcuts() -> WeightedGraph<f64> {
    let mut graph = WeightedGraph::with_vertices(GraphType::Directed, 4);
    graph.add_edge(S, A, 1.0);
    graph.add_edge(S, B, 2.0);
    graph.add_edge(A, T, 2.0);
    graph.add_edge(B, T, 2.0);
    graph.add_edge(A, B, 0.5);
    graph.add_edge(S, T, 10.0);
    graph
}

fn plain_diamond() -> WeightedGraph<f64> {
    let mut graph = WeightedGraph::with_vertices(GraphType::Directed, 4);
    graph.add_edge(S, A, 1.0);
    graph.add_edge(S, B, 1.0);
    graph.add_edge(A, T, 1.0);
    graph.add_edge(B, T, 2.0);
    graph
}

fn assert_ranked_and_simple(paths: &[GraphPath<f64>]) {
    for path in paths {
        assert!(path.is_simple(), "path {:?} revisits a vertex", path.vertex_list());
        assert_eq!(path.start_vertex(), S);
        assert_eq!(path.end_vertex(), T);
    }
    for pair in paths.windows(2) {
        assert!(pair[0].weight() <= pair[1].weight());
    }
}

#[test]
fn test_three_lightest_paths_in_order() {
    init();
    let graph = diamond_with_shortcuts();
    let engine = KShortestSimplePaths::new(&graph).with_max_hops(3);

    let paths = engine.paths(S, T, 3).unwrap();
    assert_eq!(paths.len(), 3);
    assert_ranked_and_simple(&paths);

    assert_eq!(paths[0].vertex_list(), &[S, A, T]);
    assert_eq!(paths[0].weight(), 3.0);
    assert_eq!(paths[1].vertex_list(), &[S, A, B, T]);
    assert_eq!(paths[1].weight(), 3.5);
    assert_eq!(paths[2].vertex_list(), &[S, B, T]);
    assert_eq!(paths[2].weight(), 4.0);
}

#[test]
fn test_fewer_paths_than_requested_is_not_an_error() {
    let graph = plain_diamond();
    let engine = KShortestSimplePaths::new(&graph).with_max_hops(3);

    let paths = engine.paths(S, T, 5).unwrap();
    assert_eq!(paths.len(), 2);
    assert_ranked_and_simple(&paths);
    assert_eq!(paths[0].vertex_list(), &[S, A, T]);
    assert_eq!(paths[1].vertex_list(), &[S, B, T]);
}

#[test]
fn test_all_paths_of_the_shortcut_diamond() {
    let graph = diamond_with_shortcuts();
    let paths = KShortestSimplePaths::new(&graph).paths(S, T, 10).unwrap();

    let weights: Vec<f64> = paths.iter().map(GraphPath::weight).collect();
    assert_eq!(weights, vec![3.0, 3.5, 4.0, 10.0]);
}

#[test]
fn test_max_hops_bounds_path_length() {
    let graph = diamond_with_shortcuts();

    let one_hop = KShortestSimplePaths::new(&graph).with_max_hops(1).paths(S, T, 3).unwrap();
    assert_eq!(one_hop.len(), 1);
    assert_eq!(one_hop[0].edge_list().len(), 1);

    let two_hops = KShortestSimplePaths::new(&graph).with_max_hops(2).paths(S, T, 5).unwrap();
    assert_eq!(two_hops.len(), 3);
    assert!(two_hops.iter().all(|p| p.length() <= 2));
}

#[test]
fn test_ties_keep_discovery_order() {
    let mut graph = WeightedGraph::with_vertices(GraphType::Directed, 4);
    graph.add_edge(S, A, 1.0);
    graph.add_edge(S, B, 1.0);
    graph.add_edge(A, T, 1.0);
    graph.add_edge(B, T, 1.0);

    let paths = KShortestSimplePaths::new(&graph).paths(S, T, 2).unwrap();
    assert_eq!(paths[0].vertex_list(), &[S, A, T]);
    assert_eq!(paths[1].vertex_list(), &[S, B, T]);
}

#[test]
fn test_validator_vetoes_extensions() {
    init();
    let graph = diamond_with_shortcuts();
    // Never pass through b
    let engine = KShortestSimplePaths::new(&graph)
        .with_validator(|_: &GraphPath<f64>, edge: &Edge<f64>| edge.target != B);

    let paths = engine.paths(S, T, 5).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| !p.vertex_list().contains(&B)));
    assert_eq!(paths[0].vertex_list(), &[S, A, T]);
    assert_eq!(paths[1].vertex_list(), &[S, T]);
}

#[test]
fn test_validator_sees_the_partial_path() {
    let graph = diamond_with_shortcuts();
    // At most two edges, expressed through the validator instead of max hops
    let engine = KShortestSimplePaths::new(&graph)
        .with_validator(|partial: &GraphPath<f64>, _: &Edge<f64>| partial.length() < 2);

    let paths = engine.paths(S, T, 5).unwrap();
    assert!(paths.iter().all(|p| p.length() <= 2));
    assert_eq!(paths.len(), 3);
}

#[test]
fn test_undirected_graph_paths_are_loop_free() {
    let mut graph = WeightedGraph::with_vertices(GraphType::Undirected, 4);
    graph.add_edge(S, A, 1.0);
    graph.add_edge(A, B, 1.0);
    graph.add_edge(B, T, 1.0);
    graph.add_edge(S, B, 3.0);
    graph.add_edge(A, T, 4.0);

    let paths = KShortestSimplePaths::new(&graph).paths(S, T, 10).unwrap();
    assert_ranked_and_simple(&paths);
    let weights: Vec<f64> = paths.iter().map(GraphPath::weight).collect();
    // s-a-b-t, s-b-t, s-a-t, s-b-a-t
    assert_eq!(weights, vec![3.0, 4.0, 5.0, 8.0]);
}

#[test]
fn test_preconditions_fail_fast() {
    let graph = plain_diamond();
    let engine = KShortestSimplePaths::new(&graph);

    assert_eq!(engine.paths(S, T, 0), Err(Error::InvalidK));
    assert_eq!(engine.paths(S, S, 1), Err(Error::SourceEqualsSink(S)));
    assert_eq!(engine.paths(S, 42, 1), Err(Error::VertexNotFound(42)));
    assert_eq!(engine.paths(42, T, 1), Err(Error::VertexNotFound(42)));

    let no_hops = KShortestSimplePaths::new(&graph).with_max_hops(0);
    assert_eq!(no_hops.paths(S, T, 1), Err(Error::InvalidMaxHops));
}

#[test]
fn test_unreachable_sink_yields_no_paths() {
    let mut graph = plain_diamond();
    let isolated = graph.add_vertex();

    let paths = KShortestSimplePaths::new(&graph).paths(S, isolated, 3).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = diamond_with_shortcuts();
    let engine = KShortestSimplePaths::new(&graph);
    assert_eq!(engine.paths(S, T, 4).unwrap(), engine.paths(S, T, 4).unwrap());
}
