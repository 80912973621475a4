//! `DenseVec`: the contiguous, index-addressed store behind the heaps.
//!
//! Elements live in a single owned `Vec<T>`; there are no per-element
//! allocations and no links between elements. The heaps interpret the
//! slots as an implicit binary tree, so the only operations they need are
//! append, pop-from-end, swap and indexed access. Everything else here is
//! the usual vector surface.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

/// A growable, zero-indexed sequence used as backing storage.
#[derive(Clone, PartialEq, Eq)]
pub struct DenseVec<T> {
    inner: Vec<T>,
}

impl<T> DenseVec<T> {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates an empty vector with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Current capacity.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Appends an element and returns the index it landed at.
    pub fn push(&mut self, value: T) -> usize {
        self.inner.push(value);
        self.inner.len() - 1
    }

    /// Pops the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Swaps two elements in the vector.
    ///
    /// # Panics
    /// Panics if `a` or `b` are out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.inner.swap(a, b);
    }

    /// Replaces the element at `idx`, returning the previous occupant.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub fn set(&mut self, idx: usize, value: T) -> T {
        core::mem::replace(&mut self.inner[idx], value)
    }

    /// Returns a reference to the element at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.inner.get(idx)
    }

    /// Returns a mutable reference to the element at `idx`, if any.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.inner.get_mut(idx)
    }

    /// Returns the first element.
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the last element.
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Clears the vector, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity
    /// of the vector.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Shortens the vector, keeping the first `len` elements and dropping
    /// the rest.
    ///
    /// If `len` is greater than the vector's current length, this has no
    /// effect.
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Views the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Consumes the store and returns the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}

impl<T> Default for DenseVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<T> Index<usize> for DenseVec<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.inner[idx]
    }
}

impl<T> IndexMut<usize> for DenseVec<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.inner[idx]
    }
}

impl<T> From<Vec<T>> for DenseVec<T> {
    fn from(inner: Vec<T>) -> Self {
        Self { inner }
    }
}

impl<T> FromIterator<T> for DenseVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for DenseVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DenseVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> Extend<T> for DenseVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_slot_index() {
        let mut v = DenseVec::new();
        assert_eq!(v.push('a'), 0);
        assert_eq!(v.push('b'), 1);
        assert_eq!(v.push('c'), 2);
        assert_eq!(v.len(), 3);
        assert_eq!(v.last(), Some(&'c'));
    }

    #[test]
    fn test_swap_and_set() {
        let mut v: DenseVec<i32> = (1..=4).collect();
        v.swap(0, 3);
        assert_eq!(v.as_slice(), &[4, 2, 3, 1]);

        let old = v.set(1, 20);
        assert_eq!(old, 2);
        assert_eq!(v[1], 20);

        v[2] = 30;
        assert_eq!(v.get(2), Some(&30));
        assert_eq!(v.get(4), None);
    }

    #[test]
    fn test_pop_until_empty() {
        let mut v = DenseVec::with_capacity(2);
        v.extend([1, 2]);
        assert!(v.capacity() >= 2);
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert!(v.is_empty());
    }

    #[test]
    fn test_truncate_clear_and_into_vec() {
        let mut v: DenseVec<_> = vec![5, 6, 7, 8].into();
        v.truncate(2);
        assert_eq!(v.clone().into_vec(), vec![5, 6]);
        assert_eq!((&v).into_iter().sum::<i32>(), 11);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(format!("{v:?}"), "[]");
    }
}
