use crate::graph::{EdgeKind, GraphType, MutableGraph, WeightedGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random graph with `n` vertices (identities `0..n`) and roughly
/// `edge_factor * n` edges whose weights are drawn uniformly from
/// `min_weight..max_weight`.
///
/// Self-loops are skipped; parallel edges may occur. For a mixed graph each
/// edge is directed or undirected with equal probability. The same seed always
/// yields the same graph.
pub fn generate_random_graph(
    graph_type: GraphType,
    n: usize,
    edge_factor: f64,
    min_weight: f64,
    max_weight: f64,
    seed: u64,
) -> WeightedGraph<f64> {
    assert!(min_weight < max_weight, "weight range must not be empty");

    let mut graph = WeightedGraph::with_vertices(graph_type, n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = rng.gen_range(min_weight..max_weight);
        let kind = match graph_type {
            GraphType::Mixed if rng.gen_bool(0.5) => EdgeKind::Undirected,
            other => other.default_edge_kind(),
        };
        graph.add_edge_with_kind(u, v, weight, kind);
    }

    graph
}

/// Generates a directed graph that may contain negative edges but never a
/// negative cycle.
///
/// Every edge `u -> v` is built as `base + p(v) - p(u)` from a positive base
/// weight and a random vertex potential `p`, so any cycle weighs the sum of its
/// positive base weights.
pub fn generate_negative_weight_graph(n: usize, edge_factor: f64, seed: u64) -> WeightedGraph<f64> {
    let mut graph = WeightedGraph::with_vertices(GraphType::Directed, n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let potentials: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..20.0)).collect();
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let base = rng.gen_range(1.0..10.0);
        graph.add_edge(u, v, base + potentials[v] - potentials[u]);
    }

    graph
}

/// Generates a width × height grid with edges between orthogonal neighbours
pub fn generate_grid(graph_type: GraphType, width: usize, height: usize, weight: f64) -> WeightedGraph<f64> {
    let mut graph = WeightedGraph::with_vertices(graph_type, width * height);
    let bidirectional = graph_type != GraphType::Undirected;

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, weight);
                if bidirectional {
                    graph.add_edge(vertex + 1, vertex, weight);
                }
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, weight);
                if bidirectional {
                    graph.add_edge(vertex + width, vertex, weight);
                }
            }
        }
    }

    graph
}
