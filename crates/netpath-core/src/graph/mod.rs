//! Graph storage and shortest-path queries
//!
//! Provides the weighted directed graph model:
//! - In-memory node and edge storage with fail-open edge insertion
//! - Dijkstra shortest-path queries over edge delays
//! - Value types shared by storage, queries, and output rendering

pub mod dijkstra;
pub mod store;
pub mod types;

pub use dijkstra::find_shortest_path;
pub use store::Graph;
pub use types::{Bandwidth, Delay, Edge, Node, NodeId, Route, UNREACHABLE};
