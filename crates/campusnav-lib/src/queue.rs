//! Min-priority queue used by the heuristic search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::dataset::LocationId;

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Node paired with the priority it was queued under.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QueueEntry {
    pub node: LocationId,
    priority: FloatOrd,
}

impl QueueEntry {
    pub fn new(node: LocationId, priority: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
        }
    }

    pub fn priority(&self) -> f64 {
        self.priority.0
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap of [`QueueEntry`] values.
///
/// A node may be queued more than once; callers skip entries for nodes they
/// have already expanded. Equal priorities pop the lower node index first.
#[derive(Debug, Default)]
pub struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, node: LocationId, priority: f64) {
        self.heap.push(QueueEntry::new(node, priority));
    }

    pub fn extract_min(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
