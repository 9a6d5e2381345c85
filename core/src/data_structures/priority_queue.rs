//! Min-priority queue with insertion-order tie breaking
//!
//! Thin layer over `std::collections::BinaryHeap` that pops the entry with
//! the smallest priority, and among equal priorities the one pushed first.
//! This gives the same observable order as repeatedly stable-sorting a list
//! and shifting its head, at O(log n) per operation.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry carrying the push sequence number for stable ordering
#[derive(Debug, Clone)]
struct HeapEntry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable min-priority queue keyed by `f64`
#[derive(Debug, Clone)]
pub struct StablePriorityQueue<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_sequence: u64,
}

impl<T> StablePriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, priority: f64, item: T) {
        debug_assert!(!priority.is_nan(), "Priority cannot be NaN");
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(HeapEntry {
            priority,
            sequence,
            item,
        });
    }

    /// Removes the smallest-priority entry, earliest push first on ties
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for StablePriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_priority() {
        let mut queue = StablePriorityQueue::new();
        queue.push(5.0, "e");
        queue.push(1.0, "a");
        queue.push(3.0, "c");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some((1.0, "a")));
        assert_eq!(queue.pop(), Some((3.0, "c")));
        assert_eq!(queue.pop(), Some((5.0, "e")));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut queue = StablePriorityQueue::with_capacity(4);
        queue.push(2.0, 'x');
        queue.push(1.0, 'p');
        queue.push(2.0, 'y');
        queue.push(1.0, 'q');

        let order: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(_, c)| c)).collect();
        assert_eq!(order, vec!['p', 'q', 'x', 'y']);
    }

    #[test]
    fn test_len_tracking() {
        let mut queue = StablePriorityQueue::default();
        assert!(queue.is_empty());
        queue.push(0.0, ());
        queue.push(0.0, ());
        assert_eq!(queue.len(), 2);
    }
}
