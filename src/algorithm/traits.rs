use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::path::{GraphPath, ShortestPathResult, SingleSourcePaths};
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `source` and wrap them in a lazy path view
    fn paths<'a>(&self, graph: &'a G, source: usize) -> Result<SingleSourcePaths<'a, W, G>> {
        let tree = self.compute_shortest_paths(graph, source)?;
        Ok(SingleSourcePaths::new(graph, tree))
    }

    /// Get the shortest path from source to sink, or `None` if sink is unreachable
    fn path(&self, graph: &G, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        if !graph.has_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        Ok(self.paths(graph, source)?.path(sink))
    }
}

/// Query surface shared by the all-pairs engines.
///
/// Implementations compute lazily on the first call and answer every later
/// call from their cache.
pub trait ShortestPaths<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Weight of the shortest path from source to sink; positive infinity when
    /// sink is unreachable
    fn distance(&self, source: usize, sink: usize) -> Result<W>;

    /// The shortest path from source to sink, or `None` when sink is unreachable
    fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>>;

    /// Lazy view of every shortest path leaving `source`
    fn paths(&self, source: usize) -> Result<SingleSourcePaths<'_, W, G>>;
}

/// Veto on extending a partial path by one more edge.
///
/// Closures of the form `|path, edge| -> bool` implement this trait.
pub trait PathValidator<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if `partial_path` may be extended with `edge`
    fn is_valid_path(&self, partial_path: &GraphPath<W>, edge: &Edge<W>) -> bool;
}

impl<W, F> PathValidator<W> for F
where
    W: Float + Zero + Debug + Copy,
    F: Fn(&GraphPath<W>, &Edge<W>) -> bool,
{
    fn is_valid_path(&self, partial_path: &GraphPath<W>, edge: &Edge<W>) -> bool {
        self(partial_path, edge)
    }
}
