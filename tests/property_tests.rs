//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! ternary heap agrees with a sorted `Vec` model and keeps heap order after
//! every mutation.

use proptest::prelude::*;
use std::collections::VecDeque;
use ternary_heap::ternary::TernaryHeap;
use ternary_heap::BoundedHeap;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    DeleteMin,
    DeleteMax,
    Remove(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0i64..50).prop_map(Op::Insert),
        2 => Just(Op::DeleteMin),
        2 => Just(Op::DeleteMax),
        1 => (0i64..50).prop_map(Op::Remove),
    ]
}

/// Sorted multiset used as the reference model
fn model_of(values: &[i64], capacity: usize) -> Vec<i64> {
    let mut model: Vec<i64> = values.iter().copied().take(capacity).collect();
    model.sort_unstable();
    model
}

proptest! {
    #[test]
    fn test_ops_match_model(
        initial in prop::collection::vec(0i64..50, 0..40),
        ops in prop::collection::vec(op_strategy(), 0..120),
        capacity in 1usize..64,
    ) {
        let mut heap = TernaryHeap::from_values(capacity, &initial);
        let mut model = model_of(&initial, capacity);
        prop_assert!(heap.verify_heap_order());

        for op in ops {
            match op {
                Op::Insert(value) => {
                    let full = model.len() == capacity;
                    prop_assert_eq!(heap.insert(value).is_err(), full);
                    if !full {
                        let pos = model.partition_point(|&v| v <= value);
                        model.insert(pos, value);
                    }
                }
                Op::DeleteMin => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(heap.delete_min(), expected);
                }
                Op::DeleteMax => {
                    prop_assert_eq!(heap.delete_max(), model.pop());
                }
                Op::Remove(value) => {
                    let before = model.len();
                    model.retain(|&v| v != value);
                    prop_assert_eq!(heap.remove(value), model.len() != before);
                    prop_assert_eq!(heap.search(value), None);
                }
            }

            prop_assert!(heap.verify_heap_order());
            prop_assert_eq!(heap.len(), model.len());
            prop_assert!(heap.len() <= heap.capacity());
            prop_assert_eq!(heap.peek(), model.first().copied());
        }

        prop_assert_eq!(heap.into_sorted_vec(), model);
    }

    #[test]
    fn test_pop_order_invariant(values in prop::collection::vec(0i64..1000, 0..200)) {
        let heap = TernaryHeap::from_values(values.len(), &values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), sorted);
    }

    #[test]
    fn test_construction_equivalence(values in prop::collection::vec(0i64..100, 0..100)) {
        let mut queue: VecDeque<i64> = values.iter().copied().collect();
        let from_queue = TernaryHeap::from_queue(128, &mut queue);
        let from_values = TernaryHeap::from_values(128, &values);

        prop_assert!(queue.is_empty());
        prop_assert_eq!(from_queue.raw_slots(), from_values.raw_slots());
        prop_assert_eq!(from_queue.into_sorted_vec(), from_values.into_sorted_vec());
    }

    #[test]
    fn test_search_agrees_with_scan(
        values in prop::collection::vec(0i64..30, 0..60),
        target in 0i64..30,
    ) {
        let heap = TernaryHeap::from_values(64, &values);
        match heap.search(target) {
            Some(index) => {
                prop_assert!(index < heap.len());
                prop_assert_eq!(heap.raw_slots()[index], target);
            }
            None => prop_assert!(!heap.iter().any(|&v| v == target)),
        }
    }

    #[test]
    fn test_delete_max_returns_maximum(values in prop::collection::vec(0i64..1000, 1..100)) {
        let mut heap = TernaryHeap::from_values(values.len(), &values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        while let Some(expected) = sorted.pop() {
            prop_assert_eq!(heap.delete_max(), Some(expected));
            prop_assert!(heap.verify_heap_order());
        }
        prop_assert_eq!(heap.delete_max(), None);
    }
}
