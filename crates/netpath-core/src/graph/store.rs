//! In-memory graph container
//!
//! Owns the node set and enforces the edge endpoint invariant at insertion
//! time. Queries borrow the graph immutably, so a graph cannot change while
//! a query runs.

use std::collections::HashMap;

use crate::graph::types::{Bandwidth, Delay, Edge, Node, NodeId};

/// Directed weighted graph keyed by node id
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node already stored under its id.
    ///
    /// Replacement discards the previous node's outgoing edges. The replaced
    /// node is returned so callers that care can detect the overwrite.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id(), node)
    }

    /// Append a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already exist in the graph; otherwise nothing is
    /// recorded and `false` is returned. Parallel edges between the same
    /// pair of nodes are allowed.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        delay: Delay,
        bandwidth: Bandwidth,
    ) -> bool {
        if !self.nodes.contains_key(&to) {
            return false;
        }
        match self.nodes.get_mut(&from) {
            Some(node) => {
                node.push_edge(Edge {
                    from,
                    to,
                    delay,
                    bandwidth,
                });
                true
            }
            None => false,
        }
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Whether a node with this id exists
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Outgoing edges of a node, or an empty slice for an unknown id
    pub fn outgoing_edges(&self, id: NodeId) -> &[Edge] {
        self.nodes.get(&id).map(Node::edges).unwrap_or(&[])
    }

    /// Iterate over all nodes in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges across all nodes
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.edges().len()).sum()
    }
}
