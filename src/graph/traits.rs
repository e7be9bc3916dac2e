use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

/// Direction semantics of a single edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Traversable from source to target only
    Directed,
    /// Traversable in both directions
    Undirected,
}

/// Classification of a whole graph by the kinds of edges it admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphType {
    Directed,
    Undirected,
    /// Both directed and undirected edges may appear
    Mixed,
}

impl GraphType {
    /// Edge kind used by `add_edge` when the caller does not pick one
    pub fn default_edge_kind(&self) -> EdgeKind {
        match self {
            GraphType::Undirected => EdgeKind::Undirected,
            GraphType::Directed | GraphType::Mixed => EdgeKind::Directed,
        }
    }

    /// Returns true if an edge of the given kind may be stored in this graph
    pub fn admits(&self, kind: EdgeKind) -> bool {
        match self {
            GraphType::Directed => kind == EdgeKind::Directed,
            GraphType::Undirected => kind == EdgeKind::Undirected,
            GraphType::Mixed => true,
        }
    }
}

/// A snapshot of one edge: identity, endpoints, weight and direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub id: usize,
    pub source: usize,
    pub target: usize,
    pub weight: W,
    pub kind: EdgeKind,
}

impl<W: Copy> Edge<W> {
    /// Returns the endpoint of this edge that is not `vertex`.
    ///
    /// For a self-loop both endpoints are the same vertex.
    pub fn opposite(&self, vertex: usize) -> usize {
        if vertex == self.source {
            self.target
        } else {
            self.source
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Trait representing a weighted graph with opaque vertex and edge identities
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns whether the graph is directed, undirected or mixed
    fn graph_type(&self) -> GraphType;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over the vertex identities, in a stable order
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all edges, in a stable order
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Looks up a single edge by identity
    fn edge(&self, edge: usize) -> Option<Edge<W>>;

    /// Returns an iterator over the edges that can be traversed starting at `vertex`,
    /// as `(edge, neighbour, weight)` triples.
    ///
    /// Directed edges are yielded from their source only, undirected edges from
    /// either endpoint. The weight is the cost of traversing the edge in that
    /// direction, which overlays may make direction dependent.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;

    /// Returns true if some edge can be traversed from `from` to `to`
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(_, target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, edge: usize) -> Option<W> {
        self.edge(edge).map(|e| e.weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex with the next free identity and returns it
    fn add_vertex(&mut self) -> usize;

    /// Adds a vertex with a caller-chosen identity; returns false if it already exists
    fn add_vertex_with_id(&mut self, vertex: usize) -> bool;

    /// Adds an edge of the graph's default kind and returns its identity
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Option<usize>;

    /// Adds an edge of an explicit kind; fails if the graph type does not admit it
    fn add_edge_with_kind(&mut self, from: usize, to: usize, weight: W, kind: EdgeKind) -> Option<usize>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, edge: usize) -> bool;

    /// Updates the weight of an existing edge
    fn set_edge_weight(&mut self, edge: usize, weight: W) -> bool;
}

/// Source of fresh vertex identities, used when an algorithm needs a
/// temporary vertex that must not clash with any vertex of the graph
pub trait VertexFactory {
    fn create_vertex(&self) -> usize;
}

impl<F> VertexFactory for F
where
    F: Fn() -> usize,
{
    fn create_vertex(&self) -> usize {
        self()
    }
}

/// Vertex factory that hands out the identity just above the largest one in a graph
#[derive(Debug, Clone, Copy)]
pub struct FreshVertexFactory {
    next: usize,
}

impl FreshVertexFactory {
    /// Factory for a graph with the given vertices, e.g. `graph.vertices()`
    pub fn for_vertices(vertices: impl IntoIterator<Item = usize>) -> Self {
        let next = vertices.into_iter().max().map_or(0, |max| max.saturating_add(1));
        FreshVertexFactory { next }
    }
}

impl VertexFactory for FreshVertexFactory {
    fn create_vertex(&self) -> usize {
        self.next
    }
}
