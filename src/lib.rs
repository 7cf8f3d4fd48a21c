//! Bounded Ternary Min-Heap for Rust
//!
//! This crate provides a fixed-capacity 3-ary min-heap over `i64` keys stored
//! in a single contiguous array, together with the operations a textbook heap
//! lacks:
//!
//! - **Search**: finds a value by descending from the root and pruning every
//!   subtree whose root already exceeds the target
//! - **Delete-max**: removes the largest value by scanning only the leaf layer
//! - **Remove**: deletes every occurrence of an arbitrary value
//!
//! Construction from a queue or a slice uses the linear-time bottom-up build.
//!
//! # Example
//!
//! ```rust
//! use ternary_heap::ternary::TernaryHeap;
//! use ternary_heap::BoundedHeap;
//!
//! let mut heap = TernaryHeap::from_values(16, &[4, 9, 2, 7, 1]);
//! heap.insert(3).unwrap();
//! assert_eq!(heap.search(1), Some(0));
//! assert_eq!(heap.delete_max(), Some(9));
//! assert_eq!(heap.delete_min(), Some(1));
//! print!("{}", heap.level_order());
//! ```

pub mod input;
pub mod layout;
pub mod level_order;
pub mod menu;
pub mod ternary;
pub mod traits;

// Re-export the main types for convenience
pub use level_order::LevelOrderReport;
pub use ternary::TernaryHeap;
pub use traits::{BoundedHeap, HeapError};
