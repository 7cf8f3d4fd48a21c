//! Ternary (3-ary) min-heap with a fixed capacity
//!
//! The heap lives in a single boxed slice allocated at construction. Live
//! values occupy `slots[..len]` and form an implicit ternary tree (see
//! [`layout`](crate::layout)); the remaining cells hold [`EMPTY_SLOT`].
//!
//! Besides the usual insert and delete-min, the heap supports three
//! operations that work directly on the array:
//!
//! - [`search`](TernaryHeap::search) descends from the root and prunes every
//!   subtree whose root is already larger than the target.
//! - [`delete_max`](TernaryHeap::delete_max) only scans the leaves, since the
//!   maximum of a min-heap is never an internal node.
//! - [`remove`](TernaryHeap::remove) deletes every occurrence of a value.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity      |
//! |--------------|-----------------|
//! | `insert`     | O(log₃ n)       |
//! | `delete_min` | O(log₃ n)       |
//! | `peek`       | O(1)            |
//! | `delete_max` | O(n) (leaves)   |
//! | `search`     | O(n) worst case |
//! | `remove`     | O(n) per match  |
//! | construction | O(n)            |
//!
//! # Example
//!
//! ```rust
//! use ternary_heap::BoundedHeap;
//! use ternary_heap::ternary::TernaryHeap;
//!
//! let mut heap = TernaryHeap::from_values(10, &[5, 3, 5, 1, 5]);
//! assert_eq!(heap.delete_max(), Some(5));
//! assert!(heap.remove(5));
//! assert_eq!(heap.search(5), None);
//! assert_eq!(heap.delete_min(), Some(1));
//! assert_eq!(heap.delete_min(), Some(3));
//! assert_eq!(heap.delete_min(), None);
//! ```

use std::collections::VecDeque;

use crate::layout;
use crate::level_order::LevelOrderReport;
use crate::traits::{BoundedHeap, HeapError};

/// Marker written into vacated cells. Only visible through
/// [`TernaryHeap::raw_slots`].
pub const EMPTY_SLOT: i64 = -1;

/// A bounded ternary min-heap over `i64` keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TernaryHeap {
    /// Backing storage, exactly `capacity` cells
    slots: Box<[i64]>,
    /// Number of live values at the front of `slots`
    len: usize,
}

impl TernaryHeap {
    /// Creates an empty heap that can hold `capacity` values
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![EMPTY_SLOT; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Builds a heap by draining `queue` front to back
    ///
    /// Every value is taken out of the queue, but only the first `capacity`
    /// are kept.
    pub fn from_queue(capacity: usize, queue: &mut VecDeque<i64>) -> Self {
        Self::build(capacity, queue.drain(..))
    }

    /// Builds a heap from a slice of values
    ///
    /// Values past `capacity` are dropped.
    pub fn from_values(capacity: usize, values: &[i64]) -> Self {
        Self::build(capacity, values.iter().copied())
    }

    /// Appends every value without ordering, then repairs heap order from the
    /// last parent up to the root.
    fn build(capacity: usize, values: impl Iterator<Item = i64>) -> Self {
        let mut heap = Self::new(capacity);
        let mut dropped = 0usize;
        for value in values {
            if !heap.append_unordered(value) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(capacity, dropped, "bulk load exceeded heap capacity");
        }

        if let Some(last_parent) = layout::last_parent_index(heap.len) {
            for index in (0..=last_parent).rev() {
                let value = heap.slots[index];
                heap.heapify_down(value, index);
            }
        }

        tracing::debug!(len = heap.len, capacity, "built ternary heap");
        heap
    }

    /// Writes `value` at the end of the live region without restoring order.
    /// Returns false when the heap is full.
    fn append_unordered(&mut self, value: i64) -> bool {
        if self.len == self.slots.len() {
            return false;
        }
        self.slots[self.len] = value;
        self.len += 1;
        true
    }

    /// Removes the last live cell and returns its value.
    ///
    /// Callers guarantee `len > 0`.
    fn take_last(&mut self) -> i64 {
        self.len -= 1;
        std::mem::replace(&mut self.slots[self.len], EMPTY_SLOT)
    }

    /// Finds the index of `value`, or `None` if it is not in the heap
    ///
    /// Subtrees rooted at a value larger than the target are skipped. The
    /// first match in pre-order (root, then children 1, 2, 3) is returned.
    pub fn search(&self, value: i64) -> Option<usize> {
        if self.len == 0 {
            return None;
        }

        let mut pending = vec![0usize];
        while let Some(index) = pending.pop() {
            let current = self.slots[index];
            if current == value {
                return Some(index);
            }
            if current < value {
                // reversed so child 1 is visited first
                pending.extend(layout::children(index, self.len).rev());
            }
        }
        None
    }

    /// Removes and returns the maximum value
    ///
    /// Only the leaves (indices past the last parent) are scanned.
    pub fn delete_max(&mut self) -> Option<i64> {
        let last_parent = match layout::last_parent_index(self.len) {
            Some(index) => index,
            None if self.len == 1 => return Some(self.take_last()),
            None => return None,
        };

        let mut max_index = last_parent + 1;
        for index in max_index + 1..self.len {
            if self.slots[index] > self.slots[max_index] {
                max_index = index;
            }
        }

        let max_value = self.slots[max_index];
        let moved = self.take_last();
        if max_index < self.len {
            self.slots[max_index] = moved;
            // a leaf stays a leaf, so only an upward repair can be needed
            if let Some(parent) = layout::parent(max_index) {
                if moved < self.slots[parent] {
                    self.heapify_up(moved, max_index);
                }
            }
        }
        Some(max_value)
    }

    /// Removes every occurrence of `value`
    ///
    /// Returns true if at least one occurrence was removed.
    pub fn remove(&mut self, value: i64) -> bool {
        let mut removed = 0usize;

        while let Some(index) = self.search(value) {
            removed += 1;
            tracing::trace!(value, index, "removing occurrence");

            if index == 0 {
                self.delete_min();
                continue;
            }

            let moved = self.take_last();
            if index == self.len {
                // the match was the last cell itself
                continue;
            }
            self.slots[index] = moved;

            if let Some(parent) = layout::parent(index) {
                let parent_value = self.slots[parent];
                if moved < parent_value {
                    self.heapify_up(moved, index);
                } else if moved > parent_value {
                    self.heapify_down(moved, index);
                }
            }
        }

        if removed > 0 {
            tracing::debug!(value, removed, "removed all occurrences");
        }
        removed > 0
    }

    /// Empties the heap, keeping its capacity
    pub fn clear(&mut self) {
        self.slots.fill(EMPTY_SLOT);
        self.len = 0;
    }

    /// Iterates over live values in array (level) order
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.slots[..self.len].iter()
    }

    /// All `capacity` cells, including [`EMPTY_SLOT`] markers past `len`
    pub fn raw_slots(&self) -> &[i64] {
        &self.slots
    }

    /// Live values grouped by tree level
    pub fn level_order(&self) -> LevelOrderReport {
        LevelOrderReport::new(&self.slots[..self.len])
    }

    /// Consumes the heap, returning its values in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<i64> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(value) = self.delete_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks that every live parent is no larger than each of its children
    pub fn verify_heap_order(&self) -> bool {
        (1..self.len).all(|index| match layout::parent(index) {
            Some(parent) => self.slots[parent] <= self.slots[index],
            None => true,
        })
    }

    /// Moves `value` toward the root starting from `index`, shifting larger
    /// parents down one level at a time.
    fn heapify_up(&mut self, value: i64, mut index: usize) {
        while let Some(parent) = layout::parent(index) {
            let parent_value = self.slots[parent];
            if value >= parent_value {
                break;
            }
            self.slots[index] = parent_value;
            index = parent;
        }
        tracing::trace!(value, index, "heapify up settled");
        self.slots[index] = value;
    }

    /// Moves `value` toward the leaves starting from `index`.
    ///
    /// At each level the child swapped with is the smallest child that is
    /// strictly smaller than `value`; ties go to the lowest slot. Children equal
    /// to `value` never cause a move.
    fn heapify_down(&mut self, value: i64, mut index: usize) {
        while let Some(child) = self.smallest_child_below(value, index) {
            self.slots[index] = self.slots[child];
            index = child;
            if !layout::is_internal(index, self.len) {
                break;
            }
        }
        self.slots[index] = value;
    }

    /// Index of the smallest live child of `index` holding a value strictly
    /// less than `value`.
    fn smallest_child_below(&self, value: i64, index: usize) -> Option<usize> {
        let mut smallest: Option<usize> = None;
        for child in layout::children(index, self.len) {
            let candidate = self.slots[child];
            if candidate >= value {
                continue;
            }
            match smallest {
                Some(best) if self.slots[best] <= candidate => {}
                _ => smallest = Some(child),
            }
        }
        smallest
    }
}

impl BoundedHeap for TernaryHeap {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn peek(&self) -> Option<i64> {
        self.iter().next().copied()
    }

    fn insert(&mut self, value: i64) -> Result<(), HeapError> {
        if !self.append_unordered(value) {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
                value,
            });
        }
        self.heapify_up(value, self.len - 1);
        Ok(())
    }

    fn delete_min(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }

        let min_value = self.slots[0];
        let moved = self.take_last();
        if self.len > 0 {
            self.heapify_down(moved, 0);
        }
        Some(min_value)
    }
}

impl<'a> IntoIterator for &'a TernaryHeap {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
