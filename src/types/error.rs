//! Error types for the undirected graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the undirected graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Whole-graph query on a graph with no vertices.
    #[error("Graph has no vertices")]
    EmptyGraph,

    /// Handle is not known to this graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(NodeId),

    /// No path connects the two vertices.
    #[error("No path from {start} to {end}")]
    UnreachableTarget { start: NodeId, end: NodeId },

    /// Node cannot be discarded while it is still a vertex.
    #[error("Node {0} is still a member of the vertex set")]
    StillMember(NodeId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
