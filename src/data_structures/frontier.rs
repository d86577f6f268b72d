use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap entry ordered by priority alone, smallest first
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    vertex: V,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of tentative distances backed by a binary heap.
///
/// There is no decrease-key: a vertex whose distance improves is pushed
/// again, and the caller discards the outdated entries when they are popped.
/// Order among equal priorities is unspecified.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Entry<V, P>>,
}

impl<V, P> Default for Frontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Frontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if no entries remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a vertex with its tentative distance
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Entry { priority, vertex });
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Entry { priority, vertex }| (vertex, priority))
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|entry| entry.priority)
    }
}
