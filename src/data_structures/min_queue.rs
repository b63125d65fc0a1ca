use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-first wrapper around `BinaryHeap` for frontier selection in
/// shortest path algorithms
///
/// Entries order by `(priority, vertex)`, so ties on priority resolve to
/// the smallest vertex key. Vertices may be pushed more than once with
/// different priorities; callers are expected to skip the stale entries.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Ord + Eq + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Ord + Eq + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority into the queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (vertex, *priority))
    }

    /// Clears the queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Ord + Eq + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        MinQueue::new()
    }
}
