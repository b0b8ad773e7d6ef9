//! Node handles and the node record.

use std::fmt;

use indexmap::IndexSet;

/// Opaque handle to a node stored in a [`Graph`](crate::Graph).
///
/// Handles compare by identity: two nodes holding equal values are still
/// distinct vertices. A handle carries the id of the graph that issued it,
/// so it never resolves in another graph, and it is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: u64,
    pub(crate) index: u64,
}

impl NodeId {
    /// Position of the node in its graph's issue order.
    pub fn index(self) -> u64 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A vertex value plus the handles of its neighbors.
///
/// A passive record: adjacency symmetry is maintained by the graph's edge
/// operations, not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// The payload carried by this vertex.
    pub value: T,
    /// Neighbor handles, in insertion order.
    pub adjacent: IndexSet<NodeId>,
}

impl<T> Node<T> {
    /// Create a node with no neighbors.
    pub fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// Create a node with an initial adjacency set.
    pub fn with_adjacent(value: T, adjacent: IndexSet<NodeId>) -> Self {
        Self { value, adjacent }
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
