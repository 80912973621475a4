//! # `keelson` - Classic In-Memory Containers
//!
//! A small library of array- and arena-backed data structures whose
//! correctness rests on an invariant rather than on pointer bookkeeping:
//!
//! - [`MaxBinaryHeap`]: max-heap over an implicit binary tree, ordered by a
//!   pluggable [`Compare`] value.
//! - [`PriorityQueue`]: min-heap keyed by an explicit priority.
//! - [`HashTable`]: fixed-size, separately chained table from strings to values.
//! - [`Graph`]: undirected adjacency-list graph with recursive DFS, iterative
//!   DFS and BFS traversals.
//!
//! ## Design
//!
//! Nothing here allocates per node. Heaps sit on a [`DenseVec`] and compute
//! parent/child positions from indices; the graph keeps vertices in an arena
//! and stores neighbors as slot indices. Every structure exclusively owns its
//! storage.
//!
//! ### Invariants
//!
//! 1. **Heap order**: in a [`MaxBinaryHeap`], no element is greater than its
//!    parent under the heap's comparator. In a [`PriorityQueue`], no entry has
//!    a lower priority than its parent.
//! 2. **Edge symmetry**: `b` is adjacent to `a` in a [`Graph`] iff `a` is
//!    adjacent to `b`. No self-loops or parallel edges.
//! 3. **Stable bucket mapping**: a key's bucket in a [`HashTable`] depends only
//!    on the key and the bucket count, which never changes.
//!
//! ### Failure model
//!
//! Popping an empty heap or queue returns `None`. Graph operations that name a
//! missing vertex, a missing edge, or an existing vertex return a
//! [`GraphError`]. `HashTable::set` never fails: a repeated key is appended and
//! the first value keeps winning on `get`.
//!
//! ### Concurrency
//!
//! None of the types lock internally. Share them across threads only behind
//! your own `Mutex` or similar.
//!
//! ## Example
//!
//! ```rust
//! use keelson::{Graph, HashTable, MaxBinaryHeap, PriorityQueue};
//!
//! let mut heap: MaxBinaryHeap<_> = [3, 9, 4].into_iter().collect();
//! assert_eq!(heap.extract_max(), Some(9));
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("later", 5);
//! queue.enqueue("now", 1);
//! assert_eq!(queue.dequeue(), Some("now"));
//!
//! let mut colors = HashTable::new();
//! colors.set("pink", "#FFC0CB".to_string());
//! assert_eq!(colors.get("pink").map(String::as_str), Some("#FFC0CB"));
//!
//! let mut g = Graph::new();
//! g.add_vertex('a').unwrap();
//! g.add_vertex('b').unwrap();
//! g.add_edge(&'a', &'b').unwrap();
//! assert_eq!(g.depth_first_recursive(&'a').unwrap(), vec!['a', 'b']);
//! ```
//!
//! ## Logging
//!
//! Enable the `tracing` feature to get `trace`-level events for heap sifts and
//! `debug`-level events for graph mutations and duplicate hash-table keys.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod log;

pub mod collections;
pub mod graph;

pub use collections::{
    Compare,
    DenseVec,
    FnComparator,
    HashTable,
    MaxBinaryHeap,
    MaxOrder,
    PriorityQueue,
    Reversed,
};
pub use graph::{Bfs, Dfs, Graph, GraphError};

// Compile-time layout checks for the zero-sized comparators.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<MaxOrder>() == 0);
    assert!(mem::size_of::<Reversed<MaxOrder>>() == 0);
    assert!(mem::size_of::<MaxBinaryHeap<u64>>() == mem::size_of::<DenseVec<u64>>());
};
