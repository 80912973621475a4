//! Traversals over [`Graph`].
//!
//! All three work on the graph's dense vertex indices and only translate back
//! to vertex values when yielding. Neighbors are always considered in
//! adjacency order, which is the order edges were added.
//!
//! - [`Bfs`]: FIFO worklist, vertices marked when enqueued (level order).
//! - [`Dfs`]: LIFO worklist, vertices marked when pushed. Because a vertex's
//!   neighbors are pushed together and popped in reverse, the visiting order
//!   differs from the recursive variant even though the visited set is the same.
//! - [`preorder`]: the classic recursive depth-first order, driven by an
//!   explicit frame stack so deep chains cannot overflow the call stack.

use super::adj_list::Graph;
use crate::graph::access::visited::VisitedFlags;
use std::collections::VecDeque;

/// Lazy level-order walk from a start vertex, yielding `&V`.
///
/// A vertex is marked when it is enqueued, so each reachable vertex is yielded
/// exactly once. Built by [`Graph::bfs`], which rejects a missing start vertex
/// with [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound).
pub struct Bfs<'a, V> {
    graph: &'a Graph<V>,
    visited: VisitedFlags,
    queue: VecDeque<usize>,
}

impl<'a, V> Bfs<'a, V> {
    pub(crate) fn new(graph: &'a Graph<V>, start: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.slot_count());
        let mut queue = VecDeque::new();

        if visited.try_visit(start) {
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, V> Iterator for Bfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        debug_assert!(self.visited.is_visited(u));

        for &v in self.graph.neighbor_slots(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(self.graph.vertex_at(u))
    }
}

/// Lazy stack-driven depth-first walk, yielding `&V`.
///
/// Vertices are marked on discovery (when pushed), matching
/// [`Graph::depth_first_iterative`]. The start vertex is checked by
/// [`Graph::dfs`], so an absent start fails there rather than yielding nothing.
pub struct Dfs<'a, V> {
    graph: &'a Graph<V>,
    visited: VisitedFlags,
    stack: Vec<usize>,
}

impl<'a, V> Dfs<'a, V> {
    pub(crate) fn new(graph: &'a Graph<V>, start: usize) -> Self {
        let mut visited = VisitedFlags::new(graph.slot_count());
        let mut stack = Vec::new();

        if visited.try_visit(start) {
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }
}

impl<'a, V> Iterator for Dfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        debug_assert!(self.visited.is_visited(u));

        for &v in self.graph.neighbor_slots(u) {
            if self.visited.try_visit(v) {
                self.stack.push(v);
            }
        }

        Some(self.graph.vertex_at(u))
    }
}

/// Recursive depth-first preorder from `start`, as vertex indices.
///
/// Each frame remembers how far through its neighbor list it has got, which
/// is exactly the state a recursive call would keep on the call stack.
pub(crate) fn preorder<V>(graph: &Graph<V>, start: usize) -> Vec<usize> {
    let mut visited = VisitedFlags::new(graph.slot_count());
    let mut order = Vec::new();
    let mut frames: Vec<(usize, usize)> = Vec::new();

    if visited.try_visit(start) {
        order.push(start);
        frames.push((start, 0));
    }

    while let Some(frame) = frames.last_mut() {
        let (u, cursor) = *frame;
        match graph.neighbor_slots(u).get(cursor) {
            Some(&v) => {
                frame.1 += 1;
                if visited.try_visit(v) {
                    order.push(v);
                    frames.push((v, 0));
                }
            }
            None => {
                frames.pop();
            }
        }
    }

    order
}
