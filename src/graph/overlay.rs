//! Read-only views that present a modified graph without copying it.
//!
//! Both overlays keep the original vertex and edge identities, so anything
//! computed on an overlay (predecessor edges in particular) can be used directly
//! against the underlying graph.

use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::traits::{Edge, EdgeKind, Graph, GraphType};

/// The underlying graph plus one extra vertex with a zero-weight directed edge
/// to every original vertex.
#[derive(Debug)]
pub struct VirtualSourceGraph<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'a G,
    /// Identity of the virtual vertex
    source: usize,
    /// Identity of the first synthetic edge; synthetic edge `i` leads to `targets[i]`
    first_edge: usize,
    targets: Vec<usize>,
    _weight_marker: std::marker::PhantomData<W>,
}

impl<'a, W, G> VirtualSourceGraph<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Wraps `graph`, attaching `source` as the virtual vertex.
    ///
    /// The caller is responsible for checking that `source` is not already a
    /// vertex of `graph`.
    pub fn new(graph: &'a G, source: usize) -> Self {
        let first_edge = graph.edges().map(|e| e.id + 1).max().unwrap_or(0);
        VirtualSourceGraph {
            graph,
            source,
            first_edge,
            targets: graph.vertices().collect(),
            _weight_marker: std::marker::PhantomData,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    fn synthetic(&self, index: usize) -> Edge<W> {
        Edge {
            id: self.first_edge + index,
            source: self.source,
            target: self.targets[index],
            weight: W::zero(),
            kind: EdgeKind::Directed,
        }
    }
}

impl<'a, W, G> Graph<W> for VirtualSourceGraph<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn graph_type(&self) -> GraphType {
        match self.graph.graph_type() {
            GraphType::Directed => GraphType::Directed,
            GraphType::Undirected | GraphType::Mixed => GraphType::Mixed,
        }
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count() + 1
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.graph.vertices().chain(std::iter::once(self.source)))
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex == self.source || self.graph.has_vertex(vertex)
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count() + self.targets.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(
            self.graph
                .edges()
                .chain((0..self.targets.len()).map(move |i| self.synthetic(i))),
        )
    }

    fn edge(&self, edge: usize) -> Option<Edge<W>> {
        if edge >= self.first_edge && edge - self.first_edge < self.targets.len() {
            Some(self.synthetic(edge - self.first_edge))
        } else {
            self.graph.edge(edge)
        }
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        if vertex == self.source {
            Box::new(
                self.targets
                    .iter()
                    .enumerate()
                    .map(move |(i, &target)| (self.first_edge + i, target, W::zero())),
            )
        } else {
            self.graph.outgoing_edges(vertex)
        }
    }
}

/// The underlying graph with every traversal of an edge `u -> v` costing
/// `w(u, v) + h(u) - h(v)` for a vertex potential `h`.
///
/// Vertices without a potential are treated as having potential zero.
#[derive(Debug)]
pub struct ReweightedGraph<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'a G,
    potentials: &'a HashMap<usize, W>,
}

impl<'a, W, G> ReweightedGraph<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    pub fn new(graph: &'a G, potentials: &'a HashMap<usize, W>) -> Self {
        ReweightedGraph { graph, potentials }
    }

    /// Potential of a vertex
    pub fn potential(&self, vertex: usize) -> W {
        self.potentials.get(&vertex).copied().unwrap_or_else(W::zero)
    }

    fn reduce(&self, from: usize, to: usize, weight: W) -> W {
        weight + self.potential(from) - self.potential(to)
    }
}

impl<'a, W, G> Graph<W> for ReweightedGraph<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn graph_type(&self) -> GraphType {
        self.graph.graph_type()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        self.graph.vertices()
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.graph.has_vertex(vertex)
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.graph.edges().map(move |e| Edge {
            weight: self.reduce(e.source, e.target, e.weight),
            ..e
        }))
    }

    /// The weight reported here is the reduced weight in the source-to-target
    /// direction; an undirected edge traversed backwards costs
    /// `w + h(target) - h(source)` instead.
    fn edge(&self, edge: usize) -> Option<Edge<W>> {
        self.graph.edge(edge).map(|e| Edge {
            weight: self.reduce(e.source, e.target, e.weight),
            ..e
        })
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(
            self.graph
                .outgoing_edges(vertex)
                .map(move |(edge, to, weight)| (edge, to, self.reduce(vertex, to, weight))),
        )
    }
}
