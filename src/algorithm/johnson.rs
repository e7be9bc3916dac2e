//! Johnson's algorithm for all-pairs shortest paths.
//!
//! Combines Bellman-Ford reweighting with Dijkstra from each source.
//! Better than Floyd-Warshall for sparse graphs: O(V^2 log V + VE).
//!
//! When the graph has negative edges, a virtual vertex joined to every vertex
//! by a zero-weight edge yields a potential `h` (its Bellman-Ford distances).
//! Every edge `u -> v` is then reduced to `w(u, v) + h(u) - h(v) >= 0`, which
//! keeps shortest paths shortest, and reduced distances are mapped back with
//! `d(u, v) = d'(u, v) - h(u) + h(v)`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::OnceLock;
use num_traits::{Float, Zero};

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path::{GraphPath, ShortestPathResult, SingleSourcePaths};
use crate::algorithm::{tolerance, ShortestPathAlgorithm, ShortestPaths};
use crate::graph::{EdgeKind, FreshVertexFactory, Graph, ReweightedGraph, VertexFactory, VirtualSourceGraph};
use crate::{Error, Result, DEFAULT_EPSILON};

/// Reweighting all-pairs shortest path engine.
///
/// Nothing is computed until the first query. The outcome, including a
/// structural failure such as a negative cycle, is cached and returned by every
/// later query. The graph must not change while the engine exists.
#[derive(Debug)]
pub struct Johnson<'g, W, G, F = FreshVertexFactory>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    F: VertexFactory,
{
    graph: &'g G,
    /// Supplies the temporary virtual source
    factory: F,
    /// Weights above `-epsilon` are not considered negative
    epsilon: f64,
    /// Shortest path tree of every vertex, in original weights
    trees: OnceLock<Result<HashMap<usize, ShortestPathResult<W>>>>,
}

impl<'g, W, G> Johnson<'g, W, G, FreshVertexFactory>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates an engine whose virtual vertex is one above the largest vertex identity
    pub fn with_default_factory(graph: &'g G) -> Self {
        Johnson::new(graph, FreshVertexFactory::for_vertices(graph.vertices()))
    }
}

impl<'g, W, G, F> Johnson<'g, W, G, F>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    F: VertexFactory,
{
    pub fn new(graph: &'g G, factory: F) -> Self {
        Johnson {
            graph,
            factory,
            epsilon: DEFAULT_EPSILON,
            trees: OnceLock::new(),
        }
    }

    /// Set the tolerance used to classify edge weights as negative
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    fn trees(&self) -> Result<&HashMap<usize, ShortestPathResult<W>>> {
        self.trees.get_or_init(|| self.compute()).as_ref().map_err(Clone::clone)
    }

    /// Vertex potentials making every edge weight non-negative, or `None` when
    /// the graph has no negative edge to begin with
    fn potentials(&self) -> Result<Option<HashMap<usize, W>>> {
        let epsilon: W = tolerance(self.epsilon);

        let mut negative_edges = 0usize;
        for edge in self.graph.edges() {
            if edge.weight < -epsilon {
                // Walking the edge back and forth is already a negative cycle
                if edge.kind == EdgeKind::Undirected {
                    return Err(Error::NegativeUndirectedEdge(edge.id));
                }
                negative_edges += 1;
            }
        }
        if negative_edges == 0 {
            log::debug!("johnson: no negative edges, skipping reweighting");
            return Ok(None);
        }

        let source = self.factory.create_vertex();
        if self.graph.has_vertex(source) {
            return Err(Error::VertexFactoryCollision(source));
        }

        log::debug!(
            "johnson: {} negative edges, computing potentials from virtual vertex {}",
            negative_edges,
            source
        );
        let augmented = VirtualSourceGraph::new(self.graph, source);
        let tree: ShortestPathResult<W> = BellmanFord::new()
            .with_epsilon(self.epsilon)
            .compute_shortest_paths(&augmented, source)?;

        let mut potentials = tree.distances;
        potentials.remove(&source);
        Ok(Some(potentials))
    }

    fn compute(&self) -> Result<HashMap<usize, ShortestPathResult<W>>> {
        let potentials = self.potentials()?;
        let dijkstra = Dijkstra::new().with_epsilon(self.epsilon);
        let mut trees = HashMap::with_capacity(self.graph.vertex_count());

        match &potentials {
            None => {
                for source in self.graph.vertices() {
                    log::trace!("johnson: dijkstra from {}", source);
                    trees.insert(source, dijkstra.compute_shortest_paths(self.graph, source)?);
                }
            }
            Some(h) => {
                let reweighted = ReweightedGraph::new(self.graph, h);
                for source in self.graph.vertices() {
                    log::trace!("johnson: dijkstra from {} on reduced weights", source);
                    let mut tree: ShortestPathResult<W> = dijkstra.compute_shortest_paths(&reweighted, source)?;
                    let h_source = reweighted.potential(source);
                    for (vertex, distance) in tree.distances.iter_mut() {
                        *distance = *distance - h_source + reweighted.potential(*vertex);
                    }
                    trees.insert(source, tree);
                }
            }
        }

        log::debug!("johnson: computed {} shortest path trees", trees.len());
        Ok(trees)
    }

    fn tree(&self, source: usize) -> Result<&ShortestPathResult<W>> {
        if !self.graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        self.trees()?.get(&source).ok_or(Error::VertexNotFound(source))
    }

    /// Weight of the shortest path from source to sink; positive infinity when unreachable
    pub fn distance(&self, source: usize, sink: usize) -> Result<W> {
        if !self.graph.has_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        Ok(self.tree(source)?.distance(sink).unwrap_or_else(W::infinity))
    }

    /// The shortest path from source to sink, or `None` when unreachable
    pub fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        if !self.graph.has_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        Ok(self.paths(source)?.path(sink))
    }

    /// Lazy view of every shortest path leaving `source`
    pub fn paths(&self, source: usize) -> Result<SingleSourcePaths<'g, W, G>> {
        let tree = self.tree(source)?.clone();
        Ok(SingleSourcePaths::new(self.graph, tree))
    }
}

impl<'g, W, G, F> ShortestPaths<W, G> for Johnson<'g, W, G, F>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    F: VertexFactory,
{
    fn distance(&self, source: usize, sink: usize) -> Result<W> {
        Johnson::distance(self, source, sink)
    }

    fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        Johnson::path(self, source, sink)
    }

    fn paths(&self, source: usize) -> Result<SingleSourcePaths<'_, W, G>> {
        Johnson::paths(self, source)
    }
}
