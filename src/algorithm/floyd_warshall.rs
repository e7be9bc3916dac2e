//! Floyd-Warshall algorithm for all-pairs shortest paths.
//!
//! Builds a dense V×V distance matrix together with a backtrace table holding,
//! for every pair, the first edge of the best known path. Paths are then
//! reconstructed by walking forward from the source.
//!
//! Time: O(V^3), Memory: O(V^2)
//!
//! Comparisons use plain floating-point ordering. Negative cycles are not
//! rejected: on such input the tables hold meaningless values, which
//! [`FloydWarshall::has_negative_cycle`] can be used to detect. Use
//! [`Johnson`](crate::Johnson) when that must be an error.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::OnceLock;
use num_traits::{Float, Zero};

use crate::algorithm::path::{GraphPath, ShortestPathResult, SingleSourcePaths};
use crate::algorithm::ShortestPaths;
use crate::graph::{EdgeKind, Graph};
use crate::{Error, Result};

/// Distance matrix and backtrace table, both row-major over vertex indices
#[derive(Debug)]
struct DenseTables<W> {
    vertices: Vec<usize>,
    index: HashMap<usize, usize>,
    distances: Vec<W>,
    /// First edge of the best known path for each pair
    backtrace: Vec<Option<usize>>,
}

impl<W> DenseTables<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn n(&self) -> usize {
        self.vertices.len()
    }

    fn index_of(&self, vertex: usize) -> Result<usize> {
        self.index.get(&vertex).copied().ok_or(Error::VertexNotFound(vertex))
    }

    fn distance(&self, i: usize, j: usize) -> W {
        self.distances[i * self.n() + j]
    }

    fn first_edge(&self, i: usize, j: usize) -> Option<usize> {
        self.backtrace[i * self.n() + j]
    }
}

/// Dense all-pairs shortest path engine.
///
/// Nothing is computed until the first query; the tables are then kept for the
/// lifetime of the engine. The graph must not change while the engine exists.
#[derive(Debug)]
pub struct FloydWarshall<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    tables: OnceLock<DenseTables<W>>,
    /// Last edge of the best path for each pair, built on first `last_hop`
    last_hops: OnceLock<Vec<Option<usize>>>,
}

impl<'g, W, G> FloydWarshall<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        FloydWarshall {
            graph,
            tables: OnceLock::new(),
            last_hops: OnceLock::new(),
        }
    }

    fn tables(&self) -> &DenseTables<W> {
        self.tables.get_or_init(|| self.compute())
    }

    fn require(&self, vertex: usize) -> Result<()> {
        if self.graph.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(vertex))
        }
    }

    /// Checks both endpoints against the graph before touching the tables
    fn locate(&self, source: usize, sink: usize) -> Result<(&DenseTables<W>, usize, usize)> {
        self.require(source)?;
        self.require(sink)?;
        let tables = self.tables();
        Ok((tables, tables.index_of(source)?, tables.index_of(sink)?))
    }

    fn compute(&self) -> DenseTables<W> {
        let vertices: Vec<usize> = self.graph.vertices().collect();
        let n = vertices.len();
        let index: HashMap<usize, usize> = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        log::debug!(
            "floyd-warshall: {} vertices, {} edges",
            n,
            self.graph.edge_count()
        );

        let mut distances = vec![W::infinity(); n * n];
        let mut backtrace = vec![None; n * n];

        for i in 0..n {
            distances[i * n + i] = W::zero();
        }

        // Direct edges; parallel edges keep the lightest
        for edge in self.graph.edges() {
            if edge.is_self_loop() {
                continue;
            }
            let (Some(&s), Some(&t)) = (index.get(&edge.source), index.get(&edge.target)) else {
                continue;
            };
            let mut seed = |from: usize, to: usize| {
                if edge.weight < distances[from * n + to] {
                    distances[from * n + to] = edge.weight;
                    backtrace[from * n + to] = Some(edge.id);
                }
            };
            seed(s, t);
            if edge.kind == EdgeKind::Undirected {
                seed(t, s);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = distances[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = d_ik + distances[k * n + j];
                    if through_k < distances[i * n + j] {
                        distances[i * n + j] = through_k;
                        backtrace[i * n + j] = backtrace[i * n + k];
                    }
                }
            }
        }

        DenseTables {
            vertices,
            index,
            distances,
            backtrace,
        }
    }

    /// Edges of the best i -> j path, walking forward through the backtrace table
    fn walk(&self, tables: &DenseTables<W>, i: usize, j: usize) -> Option<Vec<usize>> {
        let sink = tables.vertices[j];
        let mut current = tables.vertices[i];
        let mut edges = Vec::new();

        while current != sink {
            // Only a negative cycle can make the walk longer than V - 1 edges
            if edges.len() >= tables.n() {
                log::warn!(
                    "floyd-warshall: path from {} to {} does not terminate, graph has a negative cycle",
                    tables.vertices[i],
                    sink
                );
                return None;
            }
            let id = tables.first_edge(tables.index.get(&current).copied()?, j)?;
            let edge = self.graph.edge(id)?;
            edges.push(id);
            current = edge.opposite(current);
        }

        Some(edges)
    }

    fn last_hops(&self) -> &[Option<usize>] {
        self.last_hops.get_or_init(|| {
            let tables = self.tables();
            let n = tables.n();
            log::debug!("floyd-warshall: building last-hop table for {} vertices", n);

            let mut last_hops = vec![None; n * n];
            for i in 0..n {
                for j in 0..n {
                    if i == j || tables.first_edge(i, j).is_none() {
                        continue;
                    }
                    last_hops[i * n + j] = self.walk(tables, i, j).and_then(|edges| edges.last().copied());
                }
            }
            last_hops
        })
    }

    /// Weight of the shortest path from source to sink; positive infinity when unreachable
    pub fn distance(&self, source: usize, sink: usize) -> Result<W> {
        let (tables, i, j) = self.locate(source, sink)?;
        Ok(tables.distance(i, j))
    }

    /// The shortest path from source to sink, or `None` when unreachable
    pub fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        let (tables, i, j) = self.locate(source, sink)?;

        if i == j {
            return Ok(Some(GraphPath::singleton(source)));
        }
        if tables.first_edge(i, j).is_none() {
            return Ok(None);
        }

        Ok(self
            .walk(tables, i, j)
            .and_then(|edges| GraphPath::from_edges(self.graph, source, edges)))
    }

    /// The vertex following `source` on the shortest path to `sink`.
    ///
    /// `None` when `source == sink` or sink is unreachable.
    pub fn first_hop(&self, source: usize, sink: usize) -> Result<Option<usize>> {
        let (tables, i, j) = self.locate(source, sink)?;

        Ok(tables
            .first_edge(i, j)
            .and_then(|id| self.graph.edge(id))
            .map(|edge| edge.opposite(source)))
    }

    /// The vertex preceding `sink` on the shortest path from `source`.
    ///
    /// The first call reconstructs every path once; later calls are O(1).
    /// `None` when `source == sink` or sink is unreachable.
    pub fn last_hop(&self, source: usize, sink: usize) -> Result<Option<usize>> {
        let (tables, i, j) = self.locate(source, sink)?;

        Ok(self.last_hops()[i * tables.n() + j]
            .and_then(|id| self.graph.edge(id))
            .map(|edge| edge.opposite(sink)))
    }

    /// Number of ordered pairs `(u, v)` with `u != v` and a finite distance
    pub fn path_count(&self) -> usize {
        let tables = self.tables();
        let n = tables.n();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j && tables.distance(i, j).is_finite())
            .count()
    }

    /// Largest finite distance between any two vertices.
    ///
    /// Unreachable pairs are ignored; zero for graphs with at most one vertex.
    pub fn diameter(&self) -> W {
        self.tables()
            .distances
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(W::zero(), W::max)
    }

    /// Returns true if some vertex ended up with a negative distance to itself,
    /// which only happens when it lies on a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        let tables = self.tables();
        (0..tables.n()).any(|i| tables.distance(i, i) < W::zero())
    }

    /// Lazy view of every shortest path leaving `source`.
    ///
    /// Reuses the last-hop table when `last_hop` already built it; otherwise
    /// only the paths leaving `source` are walked.
    pub fn paths(&self, source: usize) -> Result<SingleSourcePaths<'g, W, G>> {
        self.require(source)?;
        let tables = self.tables();
        let i = tables.index_of(source)?;
        let n = tables.n();
        let last_hops = self.last_hops.get();

        let mut tree = ShortestPathResult::new(source);
        for j in 0..n {
            if j == i || tables.first_edge(i, j).is_none() {
                continue;
            }
            let distance = tables.distance(i, j);
            if distance.is_infinite() {
                continue;
            }
            let vertex = tables.vertices[j];
            tree.distances.insert(vertex, distance);
            let last_edge = match last_hops {
                Some(table) => table[i * n + j],
                None => self.walk(tables, i, j).and_then(|edges| edges.last().copied()),
            };
            if let Some(edge) = last_edge {
                tree.predecessors.insert(vertex, edge);
            }
        }

        Ok(SingleSourcePaths::new(self.graph, tree))
    }
}

impl<'g, W, G> ShortestPaths<W, G> for FloydWarshall<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn distance(&self, source: usize, sink: usize) -> Result<W> {
        FloydWarshall::distance(self, source, sink)
    }

    fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        FloydWarshall::path(self, source, sink)
    }

    fn paths(&self, source: usize) -> Result<SingleSourcePaths<'_, W, G>> {
        FloydWarshall::paths(self, source)
    }
}
