//! Array-backed heaps.
//!
//! - `max_binary_heap`: comparator-driven max-heap
//! - `priority_queue`: min-heap keyed by an explicit priority
//! - `compare`: the ordering capability the max-heap is generic over

pub mod compare;
pub mod max_binary_heap;
pub mod priority_queue;

pub use compare::{Compare, FnComparator, MaxOrder, Reversed};
pub use max_binary_heap::MaxBinaryHeap;
pub use priority_queue::PriorityQueue;
