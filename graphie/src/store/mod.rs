//! Graph store operations.
//!
//! This module provides the in-memory graph store and its CRUD operations
//! for nodes and connections.
//!
//! # Overview
//!
//! - [`Graph`] - the store itself: a node table plus per-node adjacency
//! - [`Node`] - a keyed entity with a mutable payload
//! - [`Connection`] - a directed arc between two node keys
//! - [`GraphError`] - failures surfaced by store operations
//!
//! Adjacency is enumerated in ascending order of the target key, so
//! [`Graph::connections`] is deterministic for any key type with a total
//! order.
//!
//! # Example
//!
//! ```
//! use graphie::store::Graph;
//!
//! let mut graph: Graph<&str, u32> = Graph::directed();
//! graph.add("alice", 1)?;
//! graph.add("bob", 2)?;
//! graph.connect(&"alice", &"bob", None)?;
//!
//! let outgoing: Vec<_> = graph.connections(&"alice")?.collect();
//! assert_eq!(outgoing.len(), 1);
//! assert_eq!(outgoing[0].target, "bob");
//! # Ok::<(), graphie::store::GraphError<&str>>(())
//! ```

mod connection;
mod error;
mod graph;
mod node;


pub use connection::Connection;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphMode};
pub use node::Node;
