use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{tolerance, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::graph::Graph;
use crate::{Error, Result, DEFAULT_EPSILON};

/// Classic Dijkstra's algorithm implementation for non-negative weights
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Weights in `[-epsilon, 0)` are read as zero; anything lower is rejected
    epsilon: f64,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { epsilon: DEFAULT_EPSILON }
    }

    /// Set the tolerance below zero that is still accepted as a zero weight
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }

        let epsilon: W = tolerance(self.epsilon);
        let mut result = ShortestPathResult::new(source);
        let mut settled = HashSet::with_capacity(graph.vertex_count());

        let mut queue = DistanceQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry left behind by a later improvement
            if !settled.insert(u) {
                continue;
            }

            for (edge, v, weight) in graph.outgoing_edges(u) {
                if weight.is_nan() || weight < -epsilon {
                    return Err(Error::NegativeWeight {
                        edge,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
                let new_dist = dist_u + weight.max(W::zero());

                let should_update = match result.distances.get(&v) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    result.distances.insert(v, new_dist);
                    result.predecessors.insert(v, edge);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(result)
    }
}
