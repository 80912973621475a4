//! Graph structures and traversals.
//!
//! - `basic`: the adjacency-list graph and its traversals
//! - `error`: the typed failures graph operations return

pub mod basic;
pub mod error;
pub(crate) mod access;

pub use basic::{Bfs, Dfs, Graph};
pub use error::GraphError;
