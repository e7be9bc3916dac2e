//! K shortest simple paths between one pair of vertices.
//!
//! A Bellman-Ford style relaxation that keeps, for every vertex, a ranked list
//! of up to k path elements instead of a single distance. Pass `h` extends the
//! elements created in pass `h - 1` by one edge, so after `h` passes each list
//! holds the k lightest simple paths of at most `h` edges that survived the
//! earlier rankings. Elements live in a [`PathArena`] and share their prefixes.
//!
//! Complexity: O(k * V * E) per pass, at most `max_hops` passes.

use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::path::GraphPath;
use crate::algorithm::PathValidator;
use crate::data_structures::PathArena;
use crate::graph::Graph;
use crate::{Error, Result};

/// Ranking engine enumerating the k lightest loop-free paths between two vertices
pub struct KShortestSimplePaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    /// Longest path considered, in edges; `None` means `V - 1`
    max_hops: Option<usize>,
    validator: Option<Box<dyn PathValidator<W> + 'g>>,
}

impl<'g, W, G> Debug for KShortestSimplePaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KShortestSimplePaths")
            .field("graph", &self.graph)
            .field("max_hops", &self.max_hops)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

impl<'g, W, G> KShortestSimplePaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        KShortestSimplePaths {
            graph,
            max_hops: None,
            validator: None,
        }
    }

    /// Limit the number of edges of the returned paths
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = Some(max_hops);
        self
    }

    /// Only extend partial paths the validator accepts
    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: PathValidator<W> + 'g,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// The k lightest simple paths from source to sink, lightest first.
    ///
    /// Fewer than k paths are returned when no more exist within the hop
    /// limit; equal weights keep the order in which the paths were found.
    pub fn paths(&self, source: usize, sink: usize, k: usize) -> Result<Vec<GraphPath<W>>> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        let max_hops = match self.max_hops {
            Some(0) => return Err(Error::InvalidMaxHops),
            Some(hops) => hops,
            None => self.graph.vertex_count().saturating_sub(1),
        };
        if !self.graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !self.graph.has_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        if source == sink {
            return Err(Error::SourceEqualsSink(source));
        }

        let mut arena = PathArena::new();
        let mut ranked: HashMap<usize, Vec<usize>> = HashMap::new();
        let root = arena.root(source);
        ranked.insert(source, vec![root]);

        // Elements created in the previous pass; only those can grow by one hop
        let mut frontier = vec![root];

        for pass in 1..=max_hops {
            // Drop elements pushed out of their vertex's ranking after they were created
            frontier.retain(|&element| {
                ranked
                    .get(&arena.get(element).vertex)
                    .map_or(false, |list| list.contains(&element))
            });
            let mut created = Vec::new();

            for &element in &frontier {
                let (u, weight_u, hops_u) = {
                    let e = arena.get(element);
                    (e.vertex, e.weight, e.hops)
                };
                debug_assert_eq!(hops_u + 1, pass, "frontier holds paths from the previous pass only");
                // Anything continuing past the sink would have to come back to it
                if u == sink {
                    continue;
                }

                let partial = self.validator.as_ref().and_then(|_| {
                    GraphPath::from_edges(self.graph, source, arena.edges(element))
                });

                for (edge, v, weight) in self.graph.outgoing_edges(u) {
                    if arena.contains_vertex(element, v) {
                        continue;
                    }
                    if let (Some(validator), Some(partial)) = (&self.validator, &partial) {
                        let accepted = self
                            .graph
                            .edge(edge)
                            .map_or(false, |e| validator.is_valid_path(partial, &e));
                        if !accepted {
                            continue;
                        }
                    }

                    let candidate_weight = weight_u + weight;
                    let list = ranked.entry(v).or_default();
                    // Stable: after every element that is not heavier
                    let position = list.partition_point(|&other| arena.get(other).weight <= candidate_weight);
                    if position >= k {
                        continue;
                    }

                    let candidate = arena.extend(element, edge, v, weight);
                    list.insert(position, candidate);
                    list.truncate(k);
                    created.push(candidate);
                }
            }

            log::trace!("k-shortest: pass {} created {} candidates", pass, created.len());
            if created.is_empty() {
                break;
            }
            frontier = created;
        }

        let paths: Vec<GraphPath<W>> = ranked
            .get(&sink)
            .map(|list| {
                list.iter()
                    .filter_map(|&element| GraphPath::from_edges(self.graph, source, arena.edges(element)))
                    .collect()
            })
            .unwrap_or_default();

        log::debug!(
            "k-shortest: {} of {} requested paths from {} to {} ({} elements)",
            paths.len(),
            k,
            source,
            sink,
            arena.len()
        );
        Ok(paths)
    }
}
