//! Helper functions shared across commands

use netpath_core::graph::{Graph, Node};

/// Build the built-in demonstration topology.
///
/// Five nodes with directed weighted links. The best route from 1 to 5 runs
/// through Asia-1 at total delay 27.
pub fn sample_topology() -> Graph {
    let mut graph = Graph::new();

    graph.add_node(Node::new(1, "Ero-1"));
    graph.add_node(Node::new(2, "Asia-1"));
    graph.add_node(Node::new(3, "Ero-2"));
    graph.add_node(Node::new(4, "Ws-54"));
    graph.add_node(Node::new(5, "DEST"));

    graph.add_edge(1, 2, 10, 100);
    graph.add_edge(1, 3, 15, 200);
    graph.add_edge(2, 4, 12, 150);
    graph.add_edge(3, 4, 10, 300);
    graph.add_edge(4, 5, 5, 100);

    graph
}
