//! Basic graph implementations.
//!
//! - `adj_list`: the undirected adjacency-list [`Graph`]
//! - `algorithms`: BFS and DFS traversals over it

pub mod adj_list;
pub mod algorithms;

pub use adj_list::Graph;
pub use algorithms::{Bfs, Dfs};
