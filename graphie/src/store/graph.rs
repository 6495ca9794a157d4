//! The graph store and its mutation operations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::connection::Connection;
use super::error::{GraphError, GraphResult};
use super::node::Node;

/// Whether connections are mirrored automatically.
///
/// The mode is fixed when a [`Graph`] is constructed and applies to every
/// connect and disconnect for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphMode {
    /// Each arc is independent; connecting `a -> b` says nothing about
    /// `b -> a`.
    Directed,
    /// Every connect and disconnect is applied in both directions.
    Undirected,
}

impl GraphMode {
    /// Returns `true` if connections are mirrored in both directions.
    #[must_use]
    pub const fn is_undirected(self) -> bool {
        matches!(self, Self::Undirected)
    }
}

/// An in-memory graph of keyed nodes and directed connections.
///
/// `Graph` owns two tables: a node table mapping each key to its [`Node`],
/// and an adjacency table mapping each key to its outgoing
/// [`Connection`]s, keyed and ordered by target key. The tables gain and
/// lose entries for a key together: every node has an adjacency entry
/// (possibly empty), and every adjacency entry belongs to a live node.
///
/// # Type parameters
///
/// - `K` - the node key; any totally ordered, cloneable type
/// - `D` - the node payload
/// - `C` - the connection payload; defaults to `()` for graphs whose arcs
///   carry no data
///
/// The store is single-owner and synchronous. Callers that need shared or
/// concurrent access should wrap it externally, for example behind a
/// mutex.
#[derive(Debug, Clone)]
pub struct Graph<K, D, C = ()> {
    nodes: BTreeMap<K, Node<K, D>>,
    adjacency: BTreeMap<K, BTreeMap<K, Connection<K, C>>>,
    mode: GraphMode,
}

impl<K, D, C> Graph<K, D, C> {
    /// Create an empty graph with the given connection mode.
    #[must_use]
    pub const fn new(mode: GraphMode) -> Self {
        Self { nodes: BTreeMap::new(), adjacency: BTreeMap::new(), mode }
    }

    /// Create an empty graph whose arcs are independent one-way
    /// connections.
    #[must_use]
    pub const fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    /// Create an empty graph that mirrors every connect and disconnect.
    #[must_use]
    pub const fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    /// The connection mode fixed at construction.
    #[must_use]
    pub const fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of stored arcs.
    ///
    /// Undirected graphs store the mirrored arc explicitly, so each
    /// undirected connection contributes two to this count (one for a
    /// self-loop).
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Iterate over all nodes in ascending key order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K, D>> {
        self.nodes.values()
    }
}

impl<K, D, C> Graph<K, D, C>
where
    K: Ord + Clone + fmt::Debug,
{
    /// Insert a new node with the given key and payload.
    ///
    /// The node starts with an empty adjacency entry.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeAlreadyExists`] if a node with this key
    /// is already present.
    pub fn add(&mut self, key: K, data: D) -> GraphResult<(), K> {
        if self.nodes.contains_key(&key) {
            return Err(GraphError::NodeAlreadyExists(key));
        }
        trace!(?key, "adding node");
        self.adjacency.insert(key.clone(), BTreeMap::new());
        self.nodes.insert(key.clone(), Node::new(key, data));
        Ok(())
    }

    /// Look up the node for `key`.
    ///
    /// Read-only; an absent key is `None` rather than an error.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<&Node<K, D>> {
        self.nodes.get(key)
    }

    /// Returns `true` if a node with this key exists.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Replace the payload of the node at `key` and return the updated
    /// node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the key is absent.
    pub fn update(&mut self, key: &K, data: D) -> GraphResult<&Node<K, D>, K> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))?;
        node.data = data;
        Ok(&*node)
    }

    /// Remove the node at `key`.
    ///
    /// The node must have no outgoing connections; disconnect them first.
    /// The guard inspects the node's own adjacency entry only: in a
    /// directed graph, arcs held by other nodes do not block deletion and
    /// keep referring to the removed key afterwards. In an undirected
    /// graph every connection is mirrored, so a connected node is blocked
    /// from either end.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the key is absent, and
    /// [`GraphError::NodeStillConnected`] if the node still has outgoing
    /// connections.
    pub fn delete(&mut self, key: &K) -> GraphResult<(), K> {
        let outgoing = self
            .adjacency
            .get(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))?;
        if !outgoing.is_empty() {
            return Err(GraphError::NodeStillConnected(key.clone()));
        }
        trace!(?key, "deleting node");
        self.adjacency.remove(key);
        self.nodes.remove(key);
        Ok(())
    }

    /// Create the arc `source -> target`, optionally carrying `data`.
    ///
    /// Both endpoints are validated before anything is inserted, so a
    /// failed connect leaves the graph unchanged. In an undirected graph
    /// the mirrored arc `target -> source` is created in the same step
    /// with a clone of the payload; an undirected self-loop stores a
    /// single arc.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent,
    /// and [`GraphError::AlreadyConnected`] if the arc already exists.
    pub fn connect(&mut self, source: &K, target: &K, data: Option<C>) -> GraphResult<(), K>
    where
        C: Clone,
    {
        if !self.nodes.contains_key(source) {
            return Err(GraphError::NodeNotFound(source.clone()));
        }
        if !self.nodes.contains_key(target) {
            return Err(GraphError::NodeNotFound(target.clone()));
        }
        if self.arc_exists(source, target) {
            return Err(GraphError::AlreadyConnected {
                source: source.clone(),
                target: target.clone(),
            });
        }
        trace!(?source, ?target, "connecting nodes");
        if self.mode.is_undirected() && source != target {
            self.insert_arc(target, source, data.clone());
        }
        self.insert_arc(source, target, data);
        Ok(())
    }

    /// Remove the arc `source -> target`.
    ///
    /// In an undirected graph the mirrored arc is removed as well.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `source` has no adjacency
    /// entry, and [`GraphError::NotConnected`] if the arc does not exist.
    pub fn disconnect(&mut self, source: &K, target: &K) -> GraphResult<(), K> {
        let outgoing = self
            .adjacency
            .get_mut(source)
            .ok_or_else(|| GraphError::NodeNotFound(source.clone()))?;
        if outgoing.remove(target).is_none() {
            return Err(GraphError::NotConnected {
                source: source.clone(),
                target: target.clone(),
            });
        }
        trace!(?source, ?target, "disconnecting nodes");
        if self.mode.is_undirected() {
            if let Some(reverse) = self.adjacency.get_mut(target) {
                reverse.remove(source);
            }
        }
        Ok(())
    }

    /// All outgoing arcs from `key`, in ascending order of target key.
    ///
    /// A present node with no connections yields an empty iterator. An
    /// absent key is an error: under the store's invariants a key without
    /// an adjacency entry has no node either.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the key is absent.
    pub fn connections(
        &self,
        key: &K,
    ) -> GraphResult<impl Iterator<Item = &Connection<K, C>>, K> {
        let outgoing = self
            .adjacency
            .get(key)
            .ok_or_else(|| GraphError::NodeNotFound(key.clone()))?;
        Ok(outgoing.values())
    }

    /// Returns `true` if the arc `source -> target` exists.
    ///
    /// The probe is directional; in an undirected graph both directions
    /// hold or neither does.
    #[must_use]
    pub fn is_connected(&self, source: &K, target: &K) -> bool {
        self.arc_exists(source, target)
    }

    fn arc_exists(&self, source: &K, target: &K) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|outgoing| outgoing.contains_key(target))
    }

    fn insert_arc(&mut self, source: &K, target: &K, data: Option<C>) {
        let outgoing = self.adjacency.entry(source.clone()).or_default();
        outgoing.insert(
            target.clone(),
            Connection::new(source.clone(), target.clone(), data),
        );
    }
}

impl<K, D, C> Default for Graph<K, D, C> {
    /// An empty graph in [`GraphMode::Undirected`] mode.
    fn default() -> Self {
        Self::undirected()
    }
}
