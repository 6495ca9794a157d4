//! Node (keyed entity) type for the graph.

use serde::{Deserialize, Serialize};

/// A keyed entity stored in the graph.
///
/// A node pairs an immutable key with a caller-supplied payload. The key
/// identifies the node for as long as it lives in the graph; the payload
/// may be replaced through [`Graph::update`](crate::store::Graph::update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<K, D> {
    /// The key identifying this node.
    pub key: K,
    /// The payload stored on this node.
    pub data: D,
}

impl<K, D> Node<K, D> {
    /// Create a new node with the given key and payload.
    #[must_use]
    pub fn new(key: K, data: D) -> Self {
        Self { key, data }
    }
}
