//! Bellman-Ford single-source shortest paths.
//!
//! Tolerates negative edge weights. After `V - 1` relaxation rounds every
//! shortest distance is final unless a negative cycle is reachable from the
//! source, which one extra round then exposes.
//!
//! Complexity: O(V * E)

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{tolerance, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result, DEFAULT_EPSILON};

/// Bellman-Ford algorithm with tolerance-aware relaxation
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    /// Improvements no larger than epsilon in the extra round are rounding
    /// noise, not evidence of a negative cycle
    epsilon: f64,
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord { epsilon: DEFAULT_EPSILON }
    }

    /// Set the tolerance used by negative cycle detection
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// One relaxation round over every traversable edge, applying only
    /// improvements larger than `slack`; returns whether anything changed.
    fn relax_all<W, G>(&self, graph: &G, result: &mut ShortestPathResult<W>, slack: W) -> bool
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let mut updated = false;

        for u in graph.vertices() {
            let Some(dist_u) = result.distance(u) else {
                continue;
            };

            for (edge, v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                let improves = match result.distance(v) {
                    None => true,
                    Some(current) => candidate < current - slack,
                };

                if improves {
                    result.distances.insert(v, candidate);
                    result.predecessors.insert(v, edge);
                    updated = true;
                }
            }
        }

        updated
    }
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }

        let epsilon: W = tolerance(self.epsilon);
        let mut result = ShortestPathResult::new(source);

        let rounds = graph.vertex_count().saturating_sub(1);
        let mut converged = false;
        for round in 0..rounds {
            if !self.relax_all(graph, &mut result, W::zero()) {
                log::trace!("bellman-ford from {} converged after {} rounds", source, round + 1);
                converged = true;
                break;
            }
        }

        // V-th round: any further improvement means a negative cycle
        if !converged && self.relax_all(graph, &mut result, epsilon) {
            return Err(Error::NegativeCycle);
        }

        Ok(result)
    }
}
