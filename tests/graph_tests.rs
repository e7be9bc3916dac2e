use std::collections::HashMap;

use shortest_paths::data_structures::PathArena;
use shortest_paths::graph::{
    EdgeKind, FreshVertexFactory, Graph, GraphType, MutableGraph, ReweightedGraph, VertexFactory,
    VirtualSourceGraph, WeightedGraph,
};
use shortest_paths::GraphPath;

#[test]
fn test_weighted_graph_basics() {
    let mut graph: WeightedGraph<f64> = WeightedGraph::directed();
    assert_eq!(graph.add_vertex(), 0);
    assert!(graph.add_vertex_with_id(5));
    assert!(!graph.add_vertex_with_id(5));
    assert_eq!(graph.add_vertex(), 6);
    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![0, 5, 6]);

    let e = graph.add_edge(0, 5, 2.0).unwrap();
    assert!(graph.add_edge(0, 9, 1.0).is_none());
    assert!(graph.add_edge_with_kind(0, 6, 1.0, EdgeKind::Undirected).is_none());
    assert!(graph.has_edge(0, 5));
    assert!(!graph.has_edge(5, 0));
    assert_eq!(graph.edge_weight(e), Some(2.0));

    assert!(graph.set_edge_weight(e, 3.0));
    assert_eq!(graph.edge(e).unwrap().weight, 3.0);

    assert!(graph.remove_edge(e));
    assert!(!graph.remove_edge(e));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.edge(e).is_none());
    // Identities are not reused
    assert_eq!(graph.add_edge(0, 5, 1.0), Some(e + 1));
}

#[test]
fn test_undirected_edges_are_outgoing_from_both_ends() {
    let mut graph = WeightedGraph::with_vertices(GraphType::Undirected, 3);
    let e = graph.add_edge(0, 1, 1.5).unwrap();
    let lp = graph.add_edge(2, 2, 1.0).unwrap();

    assert_eq!(graph.outgoing_edges(0).collect::<Vec<_>>(), vec![(e, 1, 1.5)]);
    assert_eq!(graph.outgoing_edges(1).collect::<Vec<_>>(), vec![(e, 0, 1.5)]);
    assert_eq!(graph.outgoing_edges(2).collect::<Vec<_>>(), vec![(lp, 2, 1.0)]);

    assert!(graph.remove_edge(e));
    assert_eq!(graph.outgoing_edges(1).count(), 0);
    assert!(graph.validate_non_negative());
}

#[test]
fn test_virtual_source_overlay() {
    let mut graph = WeightedGraph::with_vertices(GraphType::Undirected, 3);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 1.0);

    let factory = FreshVertexFactory::for_vertices(graph.vertices());
    let source = factory.create_vertex();
    assert_eq!(source, 3);

    let overlay = VirtualSourceGraph::new(&graph, source);
    assert_eq!(overlay.graph_type(), GraphType::Mixed);
    assert_eq!(overlay.vertex_count(), 4);
    assert_eq!(overlay.edge_count(), 5);
    assert!(overlay.has_vertex(source));

    let synthetic: Vec<_> = overlay.outgoing_edges(source).collect();
    assert_eq!(synthetic.len(), 3);
    for (edge, target, weight) in synthetic {
        assert_eq!(weight, 0.0);
        let edge = overlay.edge(edge).unwrap();
        assert_eq!((edge.source, edge.target, edge.kind), (source, target, EdgeKind::Directed));
        assert!(graph.edge(edge.id).is_none(), "synthetic edges must not alias real ones");
    }
    // The underlying graph is untouched
    assert_eq!(graph.vertex_count(), 3);
    assert!(!graph.has_vertex(source));
}

#[test]
fn test_reweighted_overlay_depends_on_direction() {
    let mut graph = WeightedGraph::with_vertices(GraphType::Mixed, 2);
    let e = graph.add_edge_with_kind(0, 1, 5.0, EdgeKind::Undirected).unwrap();
    let potentials = HashMap::from([(0, -1.0), (1, -3.0)]);

    let overlay = ReweightedGraph::new(&graph, &potentials);
    assert_eq!(overlay.outgoing_edges(0).collect::<Vec<_>>(), vec![(e, 1, 7.0)]);
    assert_eq!(overlay.outgoing_edges(1).collect::<Vec<_>>(), vec![(e, 0, 3.0)]);
    assert_eq!(overlay.edge(e).unwrap().weight, 7.0);
}

#[test]
fn test_path_arena_shares_prefixes() {
    let mut arena: PathArena<f64> = PathArena::new();
    let root = arena.root(0);
    let a = arena.extend(root, 10, 1, 1.0);
    let b = arena.extend(a, 11, 2, 2.0);
    let c = arena.extend(a, 12, 3, 0.5);

    assert_eq!(arena.len(), 4);
    assert_eq!(arena.edges(b), vec![10, 11]);
    assert_eq!(arena.edges(c), vec![10, 12]);
    assert_eq!(arena.vertices(c), vec![0, 1, 3]);
    assert_eq!(arena.get(b).weight, 3.0);
    assert_eq!(arena.get(c).hops, 2);
    assert!(arena.contains_vertex(c, 1));
    assert!(!arena.contains_vertex(c, 2));
}

#[test]
fn test_graph_path_from_edges_and_serde() {
    let mut graph = WeightedGraph::with_vertices(GraphType::Undirected, 3);
    let e0 = graph.add_edge(1, 0, 2.0).unwrap();
    let e1 = graph.add_edge(1, 2, 0.5).unwrap();

    let path = GraphPath::from_edges(&graph, 0, vec![e0, e1]).unwrap();
    assert_eq!(path.vertex_list(), &[0, 1, 2]);
    assert_eq!(path.weight(), 2.5);
    assert!(path.is_simple());
    // Edge e1 does not touch vertex 0
    assert!(GraphPath::from_edges(&graph, 0, vec![e1]).is_none());

    let json = serde_json::to_string(&path).unwrap();
    let back: GraphPath<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}
