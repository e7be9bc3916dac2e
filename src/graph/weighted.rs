use crate::graph::traits::{Edge, EdgeKind, Graph, GraphType, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// Stored form of an edge
#[derive(Debug, Clone)]
struct EdgeRecord<W> {
    source: usize,
    target: usize,
    weight: W,
    kind: EdgeKind,
}

/// A weighted graph implementation using adjacency lists.
///
/// Vertices keep the identity the caller gave them and are enumerated in
/// insertion order. Edges are identified by the index they were created at;
/// removed edges leave a hole so identities are never reused. Parallel edges
/// and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    graph_type: GraphType,

    /// Vertex identities in insertion order
    vertex_order: Vec<usize>,

    /// Edges traversable from each vertex: vertex_id -> [edge_id]
    adjacency: HashMap<usize, Vec<usize>>,

    /// Edge storage indexed by edge identity
    edges: Vec<Option<EdgeRecord<W>>>,

    /// Number of live (non-removed) edges
    live_edges: usize,
}

impl<W> WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph of the given type
    pub fn new(graph_type: GraphType) -> Self {
        WeightedGraph {
            graph_type,
            vertex_order: Vec::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
            live_edges: 0,
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(GraphType::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(GraphType::Undirected)
    }

    /// Creates a new empty graph accepting both edge kinds
    pub fn mixed() -> Self {
        Self::new(GraphType::Mixed)
    }

    /// Creates a graph of the given type with vertices `0..vertices`
    pub fn with_vertices(graph_type: GraphType, vertices: usize) -> Self {
        let mut graph = Self::new(graph_type);
        graph.vertex_order.reserve(vertices);
        graph.adjacency.reserve(vertices);
        for v in 0..vertices {
            graph.add_vertex_with_id(v);
        }
        graph
    }

    /// Returns true if no edge weighs less than zero
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|edge| edge.weight >= W::zero())
    }

    fn record(&self, edge: usize) -> Option<&EdgeRecord<W>> {
        self.edges.get(edge).and_then(Option::as_ref)
    }

    fn detach(&mut self, vertex: usize, edge: usize) {
        if let Some(list) = self.adjacency.get_mut(&vertex) {
            list.retain(|&e| e != edge);
        }
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.vertex_order.iter().copied())
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn edge_count(&self) -> usize {
        self.live_edges
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.edges.iter().enumerate().filter_map(|(id, record)| {
            record.as_ref().map(|r| Edge {
                id,
                source: r.source,
                target: r.target,
                weight: r.weight,
                kind: r.kind,
            })
        }))
    }

    fn edge(&self, edge: usize) -> Option<Edge<W>> {
        self.record(edge).map(|r| Edge {
            id: edge,
            source: r.source,
            target: r.target,
            weight: r.weight,
            kind: r.kind,
        })
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        match self.adjacency.get(&vertex) {
            Some(list) => Box::new(list.iter().filter_map(move |&id| {
                self.record(id).map(|r| {
                    let neighbour = if r.source == vertex { r.target } else { r.source };
                    (id, neighbour, r.weight)
                })
            })),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_order.iter().max().map_or(0, |&max| max + 1);
        self.add_vertex_with_id(new_id);
        new_id
    }

    fn add_vertex_with_id(&mut self, vertex: usize) -> bool {
        if self.has_vertex(vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        self.vertex_order.push(vertex);
        true
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Option<usize> {
        let kind = self.graph_type.default_edge_kind();
        self.add_edge_with_kind(from, to, weight, kind)
    }

    fn add_edge_with_kind(&mut self, from: usize, to: usize, weight: W, kind: EdgeKind) -> Option<usize> {
        if !self.has_vertex(from) || !self.has_vertex(to) || !self.graph_type.admits(kind) {
            return None;
        }

        let id = self.edges.len();
        self.edges.push(Some(EdgeRecord { source: from, target: to, weight, kind }));
        self.live_edges += 1;

        if let Some(list) = self.adjacency.get_mut(&from) {
            list.push(id);
        }
        // An undirected self-loop is only listed once
        if kind == EdgeKind::Undirected && from != to {
            if let Some(list) = self.adjacency.get_mut(&to) {
                list.push(id);
            }
        }

        Some(id)
    }

    fn remove_edge(&mut self, edge: usize) -> bool {
        let Some(record) = self.edges.get_mut(edge).and_then(Option::take) else {
            return false;
        };
        self.live_edges -= 1;
        self.detach(record.source, edge);
        if record.kind == EdgeKind::Undirected {
            self.detach(record.target, edge);
        }
        true
    }

    fn set_edge_weight(&mut self, edge: usize, weight: W) -> bool {
        match self.edges.get_mut(edge).and_then(Option::as_mut) {
            Some(record) => {
                record.weight = weight;
                true
            }
            None => false,
        }
    }
}
