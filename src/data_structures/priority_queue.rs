use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

/// A min-priority queue of vertices keyed by floating-point distance.
///
/// Decrease-key is done lazily: a vertex may be pushed several times and the
/// caller skips stale entries when they are popped.
#[derive(Debug)]
pub struct DistanceQueue<W>
where
    W: Float + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> DistanceQueue<W>
where
    W: Float + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Pushes a vertex with the given distance
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance.into_inner()))
    }
}

impl<W> Default for DistanceQueue<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
