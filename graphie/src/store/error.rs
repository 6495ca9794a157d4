//! Error types for graph store operations.

use thiserror::Error;

/// Errors that can occur in graph store operations.
///
/// Every variant carries the offending key(s), so callers can report the
/// failure or recover without re-deriving context from the call site.
#[derive(Debug, Error)]
pub enum GraphError<K> {
    /// A node with the given key already exists.
    #[error("node already exists: {0}")]
    NodeAlreadyExists(K),

    /// A node with the given key was not found.
    #[error("node not found: {0}")]
    NodeNotFound(K),

    /// The requested arc already exists between the two keys.
    #[error("nodes already connected: {source} -> {target}")]
    AlreadyConnected {
        /// The source node key.
        source: K,
        /// The target node key.
        target: K,
    },

    /// No arc exists between the two keys in the requested direction.
    #[error("nodes not connected: {source} -> {target}")]
    NotConnected {
        /// The source node key.
        source: K,
        /// The target node key.
        target: K,
    },

    /// The node still has outgoing connections and cannot be deleted.
    #[error("node still connected: {0}")]
    NodeStillConnected(K),
}

/// Result type for graph operations.
pub type GraphResult<T, K> = Result<T, GraphError<K>>;
