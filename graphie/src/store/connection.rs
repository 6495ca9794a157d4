//! Connection (directed arc) type for the graph.

use serde::{Deserialize, Serialize};

/// A directed arc from one node's key to another's.
///
/// A connection may carry a payload, independent of any payload on the
/// reverse arc. In an undirected graph the mirrored arc holds a clone of
/// the payload taken when the pair was connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<K, C> {
    /// The source node key.
    pub source: K,
    /// The target node key.
    pub target: K,
    /// The payload attached to this arc, if any.
    pub data: Option<C>,
}

impl<K, C> Connection<K, C> {
    /// Create a new connection between two keys.
    #[must_use]
    pub fn new(source: K, target: K, data: Option<C>) -> Self {
        Self { source, target, data }
    }
}
