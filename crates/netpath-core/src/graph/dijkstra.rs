//! Weighted shortest-path queries
//!
//! Classic Dijkstra over the graph's delay weights. Distances are tracked
//! sparsely: a node absent from the distance map is at [`UNREACHABLE`], and
//! such nodes never enter the heap, so their edges are never relaxed.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::store::Graph;
use crate::graph::types::{Delay, NodeId, Route, UNREACHABLE};

/// Heap entry ordered by accumulated delay, then node id.
///
/// Wrapped in [`Reverse`] to use `BinaryHeap` as a min-heap. The node id
/// tie-break keeps equal-cost pops deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    accumulated_delay: Delay,
    node_id: NodeId,
}

/// Find the minimum-delay route from `start` to `end`.
///
/// Returns `(0, [name])` when `start == end` and the node exists. When
/// either id is unknown, or `end` cannot be reached from `start`, the
/// sentinel route (`total_delay == UNREACHABLE`, empty path) is returned
/// rather than an error.
///
/// Relaxation updates only on a strict improvement, so with equal-cost
/// alternatives the first route found keeps its predecessor and wins.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn find_shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Route {
    let mut distances: HashMap<NodeId, Delay> = HashMap::new();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    if graph.contains(start) {
        distances.insert(start, 0);
        heap.push(Reverse(HeapEntry {
            accumulated_delay: 0,
            node_id: start,
        }));
    }

    while let Some(Reverse(HeapEntry {
        accumulated_delay,
        node_id,
    })) = heap.pop()
    {
        // Entry superseded by a later improvement
        if distances
            .get(&node_id)
            .is_some_and(|&best| accumulated_delay > best)
        {
            continue;
        }

        if node_id == end {
            return Route {
                total_delay: accumulated_delay,
                path: reconstruct_path(graph, &previous, start, end),
            };
        }

        for edge in graph.outgoing_edges(node_id) {
            // A saturated sum has reached the sentinel and stays unreachable
            let candidate = accumulated_delay.saturating_add(edge.delay);
            let best = distances.get(&edge.to).copied().unwrap_or(UNREACHABLE);
            if candidate < best {
                distances.insert(edge.to, candidate);
                previous.insert(edge.to, node_id);
                heap.push(Reverse(HeapEntry {
                    accumulated_delay: candidate,
                    node_id: edge.to,
                }));
            }
        }
    }

    Route::unreachable()
}

/// Walk the predecessor map backward from `end`, collecting node names
fn reconstruct_path(
    graph: &Graph,
    previous: &HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = end;

    if let Some(node) = graph.node(current) {
        names.push(node.name().to_string());
    }

    while current != start {
        if let Some(&pred) = previous.get(&current) {
            current = pred;
            if let Some(node) = graph.node(current) {
                names.push(node.name().to_string());
            }
        } else {
            break;
        }
    }

    names.reverse();
    names
}
