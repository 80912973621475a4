//! `MaxBinaryHeap`: a max-heap over an implicit binary tree.
//!
//! The tree lives in a [`DenseVec`]: the node at index `i` has children at
//! `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`. Ordering decisions
//! go through a [`Compare`] value, so the same code serves natural order,
//! closures, and [`Reversed`](super::Reversed) min-heaps.
//!
//! ### Tie-breaking
//! Both sifts use strict comparisons. Sift-up stops as soon as the parent is
//! not less than the element. Sift-down stops when neither child is greater;
//! when both children are greater and equal to each other, the left child wins.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert` | \(O(\log n)\) |
//! | `extract_max` | \(O(\log n)\) |
//! | `peek` | \(O(1)\) |
//! | `is_valid` | \(O(n)\) |

use super::compare::{Compare, MaxOrder};
use crate::collections::vec::DenseVec;
use core::fmt;

/// A binary heap that always yields its greatest element first.
///
/// "Greatest" is decided by the comparator `C`; with the default
/// [`MaxOrder`] it is the `Ord` maximum.
#[derive(Clone)]
pub struct MaxBinaryHeap<T, C = MaxOrder> {
    data: DenseVec<T>,
    cmp: C,
}

impl<T: Ord> MaxBinaryHeap<T> {
    /// Creates an empty heap ordered by `T: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(MaxOrder)
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MaxOrder)
    }
}

impl<T, C: Compare<T>> MaxBinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: DenseVec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: DenseVec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the heap.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts `value`, restoring the heap order by sifting it toward the root.
    pub fn insert(&mut self, value: T) {
        let idx = self.data.push(value);
        self.sift_up(idx);
    }

    /// Alias for [`insert`](Self::insert).
    pub fn push(&mut self, value: T) {
        self.insert(value);
    }

    /// Removes and returns the greatest element, or `None` if the heap is empty.
    ///
    /// The last element is promoted into the root slot and sifted down.
    pub fn extract_max(&mut self) -> Option<T> {
        let end = self.data.pop()?;
        if self.data.is_empty() {
            return Some(end);
        }
        let max = self.data.set(0, end);
        self.sift_down(0);
        Some(max)
    }

    /// Alias for [`extract_max`](Self::extract_max).
    pub fn pop(&mut self) -> Option<T> {
        self.extract_max()
    }

    /// Returns a reference to the greatest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the comparator the heap orders by.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Checks the max-heap property at every non-root index.
    pub fn is_valid(&self) -> bool {
        let slots = self.data.as_slice();
        (1..slots.len()).all(|i| !self.cmp.less(&slots[(i - 1) / 2], &slots[i]))
    }

    /// Drains the heap from greatest to least.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(value) = self.extract_max() {
            out.push(value);
        }
        out
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(parent, node) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
        trace_event!(position = node, "max heap sift up");
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut greater = left;
            if right < len && self.less(left, right) {
                greater = right;
            }

            if self.less(node, greater) {
                self.data.swap(node, greater);
                node = greater;
            } else {
                break;
            }
        }
        trace_event!(position = node, "max heap sift down");
    }

    // Helper to compare two slots in the heap
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.less(&self.data[a], &self.data[b])
    }
}

impl<T, C> MaxBinaryHeap<T, C> {
    /// Iterates over all elements in heap (array) order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Views the implicit tree as a slice; index 0 is the root.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the heap, returning the backing store in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T: Ord> Default for MaxBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MaxBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T>> Extend<T> for MaxBinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MaxBinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxBinaryHeap")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}
