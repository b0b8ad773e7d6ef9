//! In-memory undirected graph.
//!
//! Vertices carry arbitrary values and are addressed by identity through
//! [`NodeId`] handles. The graph supports vertex and edge mutation,
//! depth-first and breadth-first traversal, cycle detection and unweighted
//! shortest paths.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    CycleScope, Graph, GraphBuilder, GraphConfig, MembershipPolicy, TraversalOrder,
};
pub use types::{GraphError, GraphResult, Node, NodeId};
