//! Shortest Paths - all-pairs and k-shortest simple path engines
//!
//! Three engines share one result vocabulary (distance, path, single-source view):
//!
//! - [`FloydWarshall`]: dense O(V^3) dynamic programming over a V×V distance
//!   matrix and backtrace table, with O(1) first/last hop queries.
//! - [`Johnson`]: reweights a sparse graph through a virtual source so that
//!   Dijkstra can be run from every vertex, even with negative edge weights.
//!   Negative cycles are detected and reported instead of producing garbage.
//! - [`KShortestSimplePaths`]: the k lightest loop-free paths between one pair,
//!   bounded by a maximum hop count and an optional path validator.
//!
//! Every engine borrows one graph snapshot, does nothing until first queried and
//! caches its results for the rest of its lifetime.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
    johnson::Johnson, k_shortest::KShortestSimplePaths, GraphPath, PathValidator,
    ShortestPathAlgorithm, ShortestPathResult, ShortestPaths, SingleSourcePaths,
};
/// Re-export main types for convenient use
pub use graph::{
    Edge, EdgeKind, FreshVertexFactory, Graph, GraphType, MutableGraph, VertexFactory, WeightedGraph,
};

/// Default tolerance used when classifying the sign of a floating-point weight
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex {0} is not present in the graph")]
    VertexNotFound(usize),

    #[error("Source and sink must be distinct, both are {0}")]
    SourceEqualsSink(usize),

    #[error("Number of requested paths must be positive")]
    InvalidK,

    #[error("Maximum number of hops must be positive")]
    InvalidMaxHops,

    #[error("Vertex factory produced vertex {0}, which already exists in the graph")]
    VertexFactoryCollision(usize),

    #[error("Negative edge weight {weight} on edge {edge}")]
    NegativeWeight { edge: usize, weight: f64 },

    #[error("Undirected edge {0} has a negative weight, which forms a negative cycle")]
    NegativeUndirectedEdge(usize),

    #[error("Graph contains a negative-weight cycle")]
    NegativeCycle,
}

impl Error {
    /// Returns true for failures caused by the shape of the input graph rather
    /// than by the arguments of a single call.
    ///
    /// Such failures are cached by the engine that hit them and reproduced on
    /// every later query.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Error::NegativeCycle | Error::NegativeUndirectedEdge(_))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
