//! Integration tests for connect, disconnect, and adjacency enumeration.

use graphie::{Graph, GraphError};
use serde_json::{json, Value};

#[test]
fn connect_creates_single_arc() {
    let mut graph: Graph<&str, u32> = Graph::directed();
    graph.add("p1", 1).unwrap();
    graph.add("p2", 2).unwrap();

    graph.connect(&"p1", &"p2", None).unwrap();

    let arcs: Vec<_> = graph.connections(&"p1").unwrap().collect();
    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].source, "p1");
    assert_eq!(arcs[0].target, "p2");
    assert!(graph.is_connected(&"p1", &"p2"));
}

#[test]
fn duplicate_connect_fails() {
    let mut graph: Graph<&str, u32> = Graph::directed();
    graph.add("p1", 1).unwrap();
    graph.add("p2", 2).unwrap();
    graph.connect(&"p1", &"p2", None).unwrap();

    let result = graph.connect(&"p1", &"p2", None);
    assert!(matches!(
        result,
        Err(GraphError::AlreadyConnected { source: "p1", target: "p2" })
    ));
    assert_eq!(graph.connections(&"p1").unwrap().count(), 1);
}

#[test]
fn connect_missing_source_fails() {
    let mut graph: Graph<&str, u32> = Graph::directed();
    graph.add("p2", 2).unwrap();

    let result = graph.connect(&"p1", &"p2", None);
    assert!(matches!(result, Err(GraphError::NodeNotFound("p1"))));
}

#[test]
fn connect_missing_target_fails_without_mutation() {
    let mut graph: Graph<&str, u32> = Graph::directed();
    graph.add("p1", 1).unwrap();

    let result = graph.connect(&"p1", &"p2", None);
    assert!(matches!(result, Err(GraphError::NodeNotFound("p2"))));
    assert_eq!(graph.connections(&"p1").unwrap().count(), 0);

    // Once the target exists the same connect succeeds.
    graph.add("p2", 2).unwrap();
    graph.connect(&"p1", &"p2", None).unwrap();
    assert!(graph.is_connected(&"p1", &"p2"));
}

#[test]
fn node_can_have_multiple_connections() {
    let mut graph: Graph<&str, u32> = Graph::undirected();
    for (key, data) in [("p1", 1), ("p2", 2), ("p3", 3), ("p4", 4)] {
        graph.add(key, data).unwrap();
    }

    graph.connect(&"p1", &"p2", None).unwrap();
    graph.connect(&"p1", &"p3", None).unwrap();
    graph.connect(&"p1", &"p4", None).unwrap();

    assert_eq!(graph.connections(&"p1").unwrap().count(), 3);
}

#[test]
fn connections_are_ordered_by_target_key() {
    let mut graph: Graph<u32, ()> = Graph::directed();
    for key in [9, 5, 1, 3] {
        graph.add(key, ()).unwrap();
    }
    graph.connect(&9, &5, None).unwrap();
    graph.connect(&9, &1, None).unwrap();
    graph.connect(&9, &3, None).unwrap();

    let targets: Vec<u32> = graph.connections(&9).unwrap().map(|c| c.target).collect();
    assert_eq!(targets, vec![1, 3, 5]);
}

#[test]
fn connections_of_unconnected_node_are_empty() {
    let mut graph: Graph<&str, u32> = Graph::undirected();
    graph.add("p1", 1).unwrap();

    assert_eq!(graph.connections(&"p1").unwrap().count(), 0);
}

#[test]
fn connections_of_missing_key_fails() {
    let graph: Graph<&str, u32> = Graph::undirected();
    assert!(matches!(
        graph.connections(&"p1").map(Iterator::count),
        Err(GraphError::NodeNotFound("p1"))
    ));
}

#[test]
fn disconnect_removes_arc() {
    let mut graph: Graph<&str, u32> = Graph::directed();
    graph.add("p1", 1).unwrap();
    graph.add("p2", 2).unwrap();
    graph.connect(&"p1", &"p2", None).unwrap();

    graph.disconnect(&"p1", &"p2").unwrap();

    assert_eq!(graph.connections(&"p1").unwrap().count(), 0);
    assert!(!graph.is_connected(&"p1", &"p2"));
}

#[test]
fn disconnect_unconnected_nodes_fails() {
    let mut graph: Graph<&str, u32> = Graph::undirected();
    graph.add("p1", 1).unwrap();
    graph.add("p2", 2).unwrap();

    let result = graph.disconnect(&"p1", &"p2");
    assert!(matches!(
        result,
        Err(GraphError::NotConnected { source: "p1", target: "p2" })
    ));
}

#[test]
fn disconnect_missing_source_fails() {
    let mut graph: Graph<&str, u32> = Graph::undirected();
    let result = graph.disconnect(&"p1", &"p2");
    assert!(matches!(result, Err(GraphError::NodeNotFound("p1"))));
}

#[test]
fn weighted_connection_lifecycle() {
    let mut db: Graph<&str, u32, Value> = Graph::undirected();
    db.add("p1", 1).unwrap();
    db.add("p2", 2).unwrap();
    db.connect(&"p1", &"p2", Some(json!({ "w": 10 }))).unwrap();

    let arcs: Vec<_> = db.connections(&"p1").unwrap().collect();
    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].target, "p2");
    assert_eq!(arcs[0].data, Some(json!({ "w": 10 })));

    assert!(matches!(db.delete(&"p1"), Err(GraphError::NodeStillConnected("p1"))));

    db.disconnect(&"p1", &"p2").unwrap();
    db.delete(&"p1").unwrap();
    assert!(db.find(&"p1").is_none());
}
