pub mod path_arena;
pub mod priority_queue;

pub use path_arena::{PathArena, PathElement};
pub use priority_queue::DistanceQueue;
