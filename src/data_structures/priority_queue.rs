use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of vertex indices keyed by tentative distance.
///
/// Priorities are compared with `OrderedFloat`, a total order. Entries with
/// equal distance pop in insertion order.
#[derive(Debug)]
pub struct DistanceQueue<W>
where
    W: Float + Debug,
{
    /// The underlying binary heap: (distance, insertion sequence, vertex)
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, u64, usize)>>,
    next_seq: u64,
}

impl<W> Default for DistanceQueue<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<W> DistanceQueue<W>
where
    W: Float + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `vertex` at `distance`
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), self.next_seq, vertex)));
        self.next_seq += 1;
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, _, vertex))| (vertex, distance.into_inner()))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, _, vertex))| (*vertex, distance.into_inner()))
    }
}
