pub mod traits;
pub mod path;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod johnson;
pub mod k_shortest;

pub use path::{GraphPath, ShortestPathResult, SingleSourcePaths};
pub use traits::{PathValidator, ShortestPathAlgorithm, ShortestPaths};

use num_traits::Float;

/// Converts a configured `f64` tolerance into the weight type
pub(crate) fn tolerance<W: Float>(epsilon: f64) -> W {
    num_traits::cast(epsilon).unwrap_or_else(W::epsilon)
}
