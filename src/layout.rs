//! Index arithmetic for the implicit ternary tree
//!
//! A [`TernaryHeap`](crate::ternary::TernaryHeap) stores its tree in a flat
//! array. Node `i` has its parent at `(i - 1) / 3` and its children at
//! `3i + 1`, `3i + 2` and `3i + 3`. Every function here is a pure function of
//! an index and the live element count, so the engine never stores links.
//!
//! | Quantity            | Formula                    |
//! |---------------------|----------------------------|
//! | parent of `i > 0`   | `(i - 1) / 3`              |
//! | k-th child of `i`   | `3i + k`, `k ∈ {1, 2, 3}`  |
//! | internal node       | `3i < len - 1`             |
//! | last parent         | `(len - 2) / 3`, `len ≥ 2` |
//! | first index at `L`  | `(3^L - 1) / 2`            |

/// Branching factor of the tree.
pub const ARITY: usize = 3;

/// Returns the parent index of `index`, or `None` for the root.
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / ARITY)
    }
}

/// Returns the `nth` child (1, 2 or 3) of `index` if it is live.
///
/// # Panics
///
/// Panics in debug builds if `nth` is outside `1..=3`.
#[inline]
pub fn nth_child(index: usize, nth: usize, len: usize) -> Option<usize> {
    debug_assert!((1..=ARITY).contains(&nth), "child ordinal out of range: {nth}");
    let child = ARITY * index + nth;
    (child < len).then_some(child)
}

/// Iterates over the live children of `index` in slot order.
#[inline]
pub fn children(index: usize, len: usize) -> impl DoubleEndedIterator<Item = usize> {
    (1..=ARITY).filter_map(move |nth| nth_child(index, nth, len))
}

/// True iff `index` has at least one live child.
#[inline]
pub fn is_internal(index: usize, len: usize) -> bool {
    // 3i < len - 1, rearranged so len = 0 cannot underflow
    ARITY * index + 1 < len
}

/// Index of the last node with a child, or `None` when fewer than two
/// elements are live.
#[inline]
pub fn last_parent_index(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some((len - 2) / ARITY)
    }
}

/// First array index on level `level` (root is level 0).
#[inline]
pub fn level_start(level: u32) -> usize {
    (ARITY.pow(level) - 1) / (ARITY - 1)
}

/// Maximum number of nodes on level `level`.
#[inline]
pub fn level_width(level: u32) -> usize {
    ARITY.pow(level)
}
