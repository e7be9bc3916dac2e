use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// A walk through a graph: the edges taken, the vertices visited and the
/// total weight.
///
/// A path with no edges starts and ends at the same vertex and weighs zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPath<W> {
    start: usize,
    end: usize,
    edges: Vec<usize>,
    vertices: Vec<usize>,
    weight: W,
}

impl<W> GraphPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The zero-length path at `vertex`
    pub fn singleton(vertex: usize) -> Self {
        GraphPath {
            start: vertex,
            end: vertex,
            edges: Vec::new(),
            vertices: vec![vertex],
            weight: W::zero(),
        }
    }

    /// Builds the path that leaves `start` along `edges` in order.
    ///
    /// Returns `None` if an edge is missing from the graph or does not touch
    /// the vertex the walk has reached.
    pub fn from_edges<G>(graph: &G, start: usize, edges: Vec<usize>) -> Option<Self>
    where
        G: Graph<W>,
    {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(start);
        let mut current = start;
        let mut weight = W::zero();

        for &id in &edges {
            let edge = graph.edge(id)?;
            if edge.source != current && edge.target != current {
                return None;
            }
            current = edge.opposite(current);
            weight = weight + edge.weight;
            vertices.push(current);
        }

        Some(GraphPath {
            start,
            end: current,
            edges,
            vertices,
            weight,
        })
    }

    pub fn start_vertex(&self) -> usize {
        self.start
    }

    pub fn end_vertex(&self) -> usize {
        self.end
    }

    /// Edge identities, first edge first
    pub fn edge_list(&self) -> &[usize] {
        &self.edges
    }

    /// Visited vertices, start vertex first
    pub fn vertex_list(&self) -> &[usize] {
        &self.vertices
    }

    /// Sum of the weights of the path's edges
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Number of edges
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no vertex is visited twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(*v))
    }
}

/// Distances and predecessor edges from one source vertex
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex ID
    pub source: usize,

    /// Distances from source to each reached vertex
    pub distances: HashMap<usize, W>,

    /// Edge through which each reached vertex (other than the source) was entered
    pub predecessors: HashMap<usize, usize>,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// An empty result holding only the source at distance zero
    pub fn new(source: usize) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source, W::zero());
        ShortestPathResult {
            source,
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Distance to `vertex`, or `None` if it was not reached
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(&vertex).copied()
    }
}

/// Paths from one fixed source, materialised on demand from a predecessor map.
///
/// The view is immutable: every query walks the same precomputed tree.
#[derive(Debug)]
pub struct SingleSourcePaths<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'a G,
    tree: ShortestPathResult<W>,
}

impl<'a, W, G> SingleSourcePaths<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    pub fn new(graph: &'a G, tree: ShortestPathResult<W>) -> Self {
        SingleSourcePaths { graph, tree }
    }

    pub fn source(&self) -> usize {
        self.tree.source
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Distance to `sink`; positive infinity when unreachable
    pub fn distance(&self, sink: usize) -> W {
        self.tree.distance(sink).unwrap_or_else(W::infinity)
    }

    /// The shortest path to `sink`, or `None` when unreachable
    pub fn path(&self, sink: usize) -> Option<GraphPath<W>> {
        let source = self.tree.source;
        if sink == source {
            return self.graph.has_vertex(source).then(|| GraphPath::singleton(source));
        }
        self.tree.distance(sink)?;

        let mut edges = Vec::new();
        let mut current = sink;
        while current != source {
            // A well-formed tree never needs more steps than there are vertices
            if edges.len() >= self.graph.vertex_count() {
                log::warn!("predecessor walk from {} to {} does not terminate", source, sink);
                return None;
            }
            let id = *self.tree.predecessors.get(&current)?;
            let edge = self.graph.edge(id)?;
            edges.push(id);
            current = edge.opposite(current);
        }
        edges.reverse();

        GraphPath::from_edges(self.graph, source, edges)
    }

    /// The underlying distances and predecessor edges
    pub fn tree(&self) -> &ShortestPathResult<W> {
        &self.tree
    }
}
