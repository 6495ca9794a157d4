//! Graphie
//!
//! This crate provides an in-memory, generically-keyed graph store: nodes
//! carry a caller-chosen key and payload, connections are directed arcs
//! between node keys with an optional payload of their own, and every
//! mutation preserves referential integrity between the node table and the
//! adjacency table.
//!
//! # Modules
//!
//! - [`store`] - The graph store, its node and connection types, and errors

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod store;

// Re-export commonly used types
pub use store::{Connection, Graph, GraphError, GraphMode, GraphResult, Node};
