//! Common traits for bounded heap data structures
//!
//! [`BoundedHeap`] is the capacity-aware counterpart of the usual
//! push/pop/peek priority queue API. Keys double as priority and identity,
//! so the trait is not generic over a separate payload.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap already holds `capacity` elements; `value` was not inserted
    #[error("heap is full (capacity {capacity}), cannot insert {value}")]
    CapacityExceeded {
        /// The fixed capacity of the heap
        capacity: usize,
        /// The rejected value
        value: i64,
    },
}

/// Base trait for fixed-capacity min-heaps over integer keys
///
/// # Example
///
/// ```rust
/// use ternary_heap::BoundedHeap;
/// use ternary_heap::ternary::TernaryHeap;
///
/// let mut heap = TernaryHeap::new(2);
/// heap.insert(3).unwrap();
/// heap.insert(1).unwrap();
/// assert!(heap.insert(2).is_err());
///
/// assert_eq!(heap.peek(), Some(1));
/// assert_eq!(heap.delete_min(), Some(1));
/// ```
pub trait BoundedHeap {
    /// Maximum number of elements, fixed at construction
    fn capacity(&self) -> usize;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if another insert would be rejected
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns the minimum without removing it
    fn peek(&self) -> Option<i64>;

    /// Inserts a value, keeping heap order
    ///
    /// # Errors
    /// Returns `HeapError::CapacityExceeded` if the heap is full. The heap is
    /// left unchanged in that case.
    fn insert(&mut self, value: i64) -> Result<(), HeapError>;

    /// Removes and returns the minimum
    fn delete_min(&mut self) -> Option<i64>;
}
