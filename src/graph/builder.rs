//! Fluent API for building Graph instances.

use log::debug;

use crate::types::{GraphResult, Node, NodeId};

use super::config::GraphConfig;
use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes are stored immediately so their handles can be linked; edges are
/// applied and validated by [`build`](Self::build).
pub struct GraphBuilder<T> {
    graph: Graph<T>,
    links: Vec<(NodeId, NodeId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with explicit settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
            links: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, value: T) -> NodeId {
        self.graph.insert(value)
    }

    /// Add a node that is stored but not a vertex.
    pub fn detached(&mut self, value: T) -> NodeId {
        self.graph.store(Node::new(value))
    }

    /// Add an edge between two nodes.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.links.push((a, b));
        self
    }

    /// Build the final Graph. Fails if a link names an unknown handle.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = self.graph;
        for (a, b) in self.links {
            graph.add_edge(a, b)?;
        }
        debug!(
            "Built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
