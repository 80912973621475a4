//! Container types.
//!
//! Collections are organized by data structure type:
//! - `vec`: contiguous index-addressed storage
//! - `heap`: the max binary heap and the priority queue built on it
//! - `hash`: the chained string-keyed hash table

pub mod hash;
pub mod heap;
pub mod vec;

pub use hash::HashTable;
pub use heap::{Compare, FnComparator, MaxBinaryHeap, MaxOrder, PriorityQueue, Reversed};
pub use vec::DenseVec;
