//! Undirected adjacency-list graph over arbitrary hashable vertices.
//!
//! Vertices are stored in an arena: `vertices[i]` is the value of slot `i`,
//! `adjacency[i]` lists the slots adjacent to it, and a `HashMap` resolves a
//! vertex value to its slot. Neighbor lists hold indices, never references to
//! other vertices, so there are no cycles between owned objects.
//!
//! Every edge is stored twice, once in each endpoint's list. All mutation goes
//! through [`add_edge`](Graph::add_edge), [`remove_edge`](Graph::remove_edge)
//! and [`remove_vertex`](Graph::remove_vertex), each of which updates both
//! sides, so `b ∈ adj(a)` iff `a ∈ adj(b)` always holds.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Appends to the arena |
//! | `remove_vertex` | \(O(n + m)\) | Scans and renumbers all adjacency lists |
//! | `add_edge` | \(O(\text{degree})\) | Checks for an existing edge first |
//! | `remove_edge` | \(O(\text{degree})\) | Linear scan of both lists |
//! | traversals | \(O(n + m)\) | Visited flags are a dense `Vec<bool>` |

use super::algorithms::{self, Bfs, Dfs};
use crate::graph::error::GraphError;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

/// An undirected graph without self-loops or parallel edges.
///
/// ```rust
/// use keelson::Graph;
///
/// let mut g = Graph::new();
/// for v in ["A", "B", "C"] {
///     g.add_vertex(v).unwrap();
/// }
/// g.add_edge(&"A", &"B").unwrap();
/// g.add_edge(&"B", &"C").unwrap();
///
/// assert_eq!(g.breadth_first(&"A").unwrap(), vec!["A", "B", "C"]);
/// ```
#[derive(Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    adjacency: Vec<Vec<usize>>,
    index: HashMap<V, usize>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn slot_of(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| {
                debug_event!("rejected: vertex not found");
                GraphError::VertexNotFound(vertex.clone())
            })
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// [`GraphError::DuplicateKey`] if `vertex` is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V>> {
        if self.index.contains_key(&vertex) {
            debug_event!(slot = self.index[&vertex], "add_vertex rejected: duplicate");
            return Err(GraphError::DuplicateKey(vertex));
        }
        let slot = self.vertices.len();
        self.index.insert(vertex.clone(), slot);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        debug_event!(slot, "vertex added");
        Ok(())
    }

    /// Connects `a` and `b`.
    ///
    /// Adding an edge that already exists, or an edge from a vertex to itself,
    /// leaves the graph unchanged.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is absent.
    pub fn add_edge(&mut self, a: &V, b: &V) -> Result<(), GraphError<V>> {
        let ia = self.slot_of(a)?;
        let ib = self.slot_of(b)?;
        if ia == ib || self.adjacency[ia].contains(&ib) || self.adjacency[ib].contains(&ia) {
            debug_event!(a = ia, b = ib, "add_edge ignored: self-loop or existing edge");
            return Ok(());
        }
        self.adjacency[ia].push(ib);
        self.adjacency[ib].push(ia);
        debug_event!(a = ia, b = ib, "edge added");
        Ok(())
    }

    /// Disconnects `a` and `b`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is absent, and
    /// [`GraphError::EdgeNotFound`] if they are not adjacent.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<(), GraphError<V>> {
        let ia = self.slot_of(a)?;
        let ib = self.slot_of(b)?;
        let pa = self.adjacency[ia].iter().position(|&v| v == ib);
        let pb = self.adjacency[ib].iter().position(|&v| v == ia);
        if pa.is_none() && pb.is_none() {
            debug_event!(a = ia, b = ib, "remove_edge rejected: not adjacent");
            return Err(GraphError::EdgeNotFound(a.clone(), b.clone()));
        }
        if let Some(p) = pa {
            self.adjacency[ia].remove(p);
        }
        if let Some(p) = pb {
            self.adjacency[ib].remove(p);
        }
        debug_event!(a = ia, b = ib, "edge removed");
        Ok(())
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// The vertex is first dropped from every adjacency list, then its own
    /// slot is removed and the slots above it shift down by one. Insertion
    /// order of the remaining vertices is preserved.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError<V>> {
        let slot = self.slot_of(vertex)?;

        for nbrs in &mut self.adjacency {
            nbrs.retain(|&v| v != slot);
            for v in nbrs.iter_mut() {
                if *v > slot {
                    *v -= 1;
                }
            }
        }

        self.adjacency.remove(slot);
        let removed = self.vertices.remove(slot);
        self.index.remove(&removed);
        for (offset, v) in self.vertices[slot..].iter().enumerate() {
            if let Some(s) = self.index.get_mut(v) {
                *s = slot + offset;
            }
        }
        debug_event!(slot, remaining = self.vertices.len(), "vertex removed");
        Ok(())
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns `true` if `a` and `b` are adjacent.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is absent.
    pub fn has_edge(&self, a: &V, b: &V) -> Result<bool, GraphError<V>> {
        let ia = self.slot_of(a)?;
        let ib = self.slot_of(b)?;
        Ok(self.adjacency[ia].contains(&ib))
    }

    /// Neighbors of `vertex` in the order their edges were added.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is absent.
    pub fn neighbors<'a>(
        &'a self,
        vertex: &V,
    ) -> Result<impl Iterator<Item = &'a V> + 'a, GraphError<V>> {
        let slot = self.slot_of(vertex)?;
        Ok(self.adjacency[slot].iter().map(move |&v| &self.vertices[v]))
    }

    /// Number of edges touching `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is absent.
    pub fn degree(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        Ok(self.adjacency[self.slot_of(vertex)?].len())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> core::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Checks that every stored edge is present in both endpoint lists.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .enumerate()
            .all(|(u, nbrs)| nbrs.iter().all(|&v| self.adjacency[v].contains(&u)))
    }

    /// Depth-first order from `start`, descending into each unvisited neighbor
    /// before moving on to the next one.
    ///
    /// Vertices unreachable from `start` are not included.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    pub fn depth_first_recursive(&self, start: &V) -> Result<Vec<V>, GraphError<V>> {
        let slot = self.slot_of(start)?;
        Ok(algorithms::preorder(self, slot)
            .into_iter()
            .map(|u| self.vertices[u].clone())
            .collect())
    }

    /// Depth-first order from `start` using an explicit stack.
    ///
    /// Visits the same set of vertices as
    /// [`depth_first_recursive`](Self::depth_first_recursive), but the order
    /// generally differs: all of a vertex's unvisited neighbors are pushed at
    /// once and the last one pushed is explored first.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    pub fn depth_first_iterative(&self, start: &V) -> Result<Vec<V>, GraphError<V>> {
        Ok(self.dfs(start)?.cloned().collect())
    }

    /// Level-order traversal from `start`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    pub fn breadth_first(&self, start: &V) -> Result<Vec<V>, GraphError<V>> {
        Ok(self.bfs(start)?.cloned().collect())
    }

    /// Lazy form of [`depth_first_iterative`](Self::depth_first_iterative).
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    pub fn dfs(&self, start: &V) -> Result<Dfs<'_, V>, GraphError<V>> {
        Ok(Dfs::new(self, self.slot_of(start)?))
    }

    /// Lazy form of [`breadth_first`](Self::breadth_first).
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    pub fn bfs(&self, start: &V) -> Result<Bfs<'_, V>, GraphError<V>> {
        Ok(Bfs::new(self, self.slot_of(start)?))
    }
}

impl<V> Graph<V> {
    pub(crate) fn slot_count(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn neighbor_slots(&self, slot: usize) -> &[usize] {
        &self.adjacency[slot]
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> &V {
        &self.vertices[slot]
    }
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (v, nbrs) in self.vertices.iter().zip(&self.adjacency) {
            map.entry(v, &nbrs.iter().map(|&n| &self.vertices[n]).collect::<Vec<_>>());
        }
        map.finish()
    }
}
