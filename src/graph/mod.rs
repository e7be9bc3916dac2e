pub mod traits;
pub mod weighted;
pub mod overlay;
pub mod generators;

pub use traits::{Edge, EdgeKind, FreshVertexFactory, Graph, GraphType, MutableGraph, VertexFactory};
pub use weighted::WeightedGraph;
pub use overlay::{ReweightedGraph, VirtualSourceGraph};
