use serde::Serialize;

/// Node identifier, unique within a graph
pub type NodeId = u32;

/// Edge traversal cost. Routes are selected by minimizing the sum of delays.
pub type Delay = u32;

/// Link capacity attribute, carried on edges but not used in route selection
pub type Bandwidth = u32;

/// Sentinel distance for nodes with no known route.
///
/// Doubles as the `total_delay` of a failed query, so callers can test
/// reachability without an error channel.
pub const UNREACHABLE: Delay = Delay::MAX;

/// Directed weighted connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source node id
    pub from: NodeId,
    /// Destination node id
    pub to: NodeId,
    /// Traversal cost
    pub delay: Delay,
    /// Link capacity
    pub bandwidth: Bandwidth,
}

/// Vertex in the graph, owning its outgoing edges.
///
/// Identity is fixed at construction. Edges are appended through
/// [`Graph::add_edge`](crate::graph::Graph::add_edge) once the node has been
/// inserted into a graph.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    id: NodeId,
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    /// Create a node with no outgoing edges
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

/// Result of a shortest-path query.
///
/// "No route" is a normal value, not an error: `total_delay` carries the
/// [`UNREACHABLE`] sentinel and `path` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Sum of edge delays along the path
    pub total_delay: Delay,
    /// Node names from start to end
    pub path: Vec<String>,
}

impl Route {
    /// Whether the query found a path
    pub fn found(&self) -> bool {
        self.total_delay != UNREACHABLE
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            total_delay: UNREACHABLE,
            path: Vec::new(),
        }
    }
}
