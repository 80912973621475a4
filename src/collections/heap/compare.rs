//! Pluggable orderings for [`MaxBinaryHeap`](super::MaxBinaryHeap).
//!
//! The heap never calls `Ord` directly; it asks a [`Compare`] value. That
//! keeps the sift logic the same whether elements are ordered naturally,
//! by a closure, or in reverse.

use core::cmp::Ordering;
use core::fmt;

/// A total order over `T` supplied by the caller.
///
/// Implementations must be consistent: if `compare(a, b)` is `Less` then
/// `compare(b, a)` is `Greater`, and `Less` is transitive. A comparator that
/// breaks these rules will not crash the heap, but extraction order is then
/// unspecified.
pub trait Compare<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` sorts strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Natural `Ord` ordering. The heap built on it is a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts any `Fn(&T, &T) -> Ordering` closure into a [`Compare`].
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<T, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator(..)")
    }
}

/// Flips another comparator.
///
/// `MaxBinaryHeap<T, Reversed<MaxOrder>>` pops the smallest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
