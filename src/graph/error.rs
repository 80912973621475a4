//! Typed failures for graph mutation and traversal.

use core::fmt;

/// The error type for graph operations.
///
/// Each variant carries the vertex (or vertices) the operation was asked
/// about, so callers can report or recover without re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// `add_vertex` was given a vertex that is already present.
    DuplicateKey(V),
    /// An operation referenced a vertex that is not in the graph.
    VertexNotFound(V),
    /// `remove_edge` was asked for an edge between two present but unconnected vertices.
    EdgeNotFound(V, V),
}

impl<V: fmt::Debug> fmt::Display for GraphError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateKey(v) => write!(f, "vertex {v:?} already exists"),
            GraphError::VertexNotFound(v) => write!(f, "vertex {v:?} was not found"),
            GraphError::EdgeNotFound(a, b) => write!(f, "no edge between {a:?} and {b:?}"),
        }
    }
}

impl<V: fmt::Debug> std::error::Error for GraphError<V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(GraphError::DuplicateKey("A").to_string(), "vertex \"A\" already exists");
        assert_eq!(GraphError::VertexNotFound(7).to_string(), "vertex 7 was not found");
        assert_eq!(
            GraphError::EdgeNotFound('x', 'y').to_string(),
            "no edge between 'x' and 'y'"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GraphError::VertexNotFound(1u32));
        assert!(err.source().is_none());
    }
}
