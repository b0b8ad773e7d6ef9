//! Core graph structure: a node arena plus the vertex set.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;
use log::{debug, trace};

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::config::{GraphConfig, MembershipPolicy};
use super::traversal::TraversalOrder;
use super::{cycle, path, traversal};

/// Source of per-graph ids stamped into every issued [`NodeId`].
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// In-memory undirected graph.
///
/// Nodes live in an arena keyed by [`NodeId`]. A node becomes a vertex once
/// its handle is added to the vertex set; edges may also reach nodes that
/// are stored but not (or no longer) vertices.
///
/// Handles issued by one graph are unknown to every other graph. A clone
/// keeps the id of its source, so existing handles resolve in both.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Every node this graph stores, member or not.
    nodes: HashMap<NodeId, Node<T>>,
    /// Vertex set, in insertion order.
    vertices: IndexSet<NodeId>,
    /// Id stamped into every handle this graph issues.
    graph_id: u64,
    /// Next handle index to hand out.
    next_id: u64,
    config: GraphConfig,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::new().capacity(capacity))
    }

    /// Create an empty graph with explicit settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: HashMap::with_capacity(config.capacity),
            vertices: IndexSet::with_capacity(config.capacity),
            graph_id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            next_id: 0,
            config,
        }
    }

    /// Settings this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Store a node and return its handle. The node is not yet a vertex.
    ///
    /// The initial adjacency set is kept exactly as given; every handle in
    /// it must already be stored here, or nothing is stored.
    pub fn create(&mut self, node: Node<T>) -> GraphResult<NodeId> {
        for &neighbor in &node.adjacent {
            self.ensure_node(neighbor)?;
        }
        Ok(self.store(node))
    }

    /// Store a value as a new vertex.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = self.store(Node::new(value));
        self.vertices.insert(id);
        debug!("Inserted vertex {}", id);
        id
    }

    /// Add a stored node to the vertex set. Adding a member again is a no-op.
    pub fn add_vertex(&mut self, id: NodeId) -> GraphResult<()> {
        self.ensure_node(id)?;
        if self.vertices.insert(id) {
            debug!("Added vertex {}", id);
        }
        Ok(())
    }

    /// Add each handle in order. All handles are checked first, so an
    /// unknown one leaves the vertex set untouched.
    pub fn add_vertices<I>(&mut self, ids: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let ids: Vec<NodeId> = ids.into_iter().collect();
        for &id in &ids {
            self.ensure_node(id)?;
        }
        for id in ids {
            if self.vertices.insert(id) {
                debug!("Added vertex {}", id);
            }
        }
        Ok(())
    }

    /// Connect two nodes. Neither needs to be a vertex.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        self.link(a, b);
        self.link(b, a);
        trace!("Added edge {} -- {}", a, b);
        Ok(())
    }

    /// Disconnect two nodes. A missing edge or unknown handle is not an
    /// error.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.unlink(a, b);
        self.unlink(b, a);
        trace!("Removed edge {} -- {}", a, b);
        Ok(())
    }

    /// Drop a vertex from the vertex set and scrub every other node's
    /// reference to it. Removing a non-member or unknown handle only scrubs
    /// references.
    ///
    /// The removed node keeps its own adjacency set and stays stored until
    /// [`discard`](Self::discard)ed.
    pub fn remove_vertex(&mut self, id: NodeId) -> GraphResult<()> {
        let was_member = self.vertices.shift_remove(&id);
        self.scrub(id);
        if was_member {
            debug!("Removed vertex {}", id);
        }
        Ok(())
    }

    /// Reclaim a stored node that is no longer a vertex.
    pub fn discard(&mut self, id: NodeId) -> GraphResult<Node<T>> {
        if self.vertices.contains(&id) {
            return Err(GraphError::StillMember(id));
        }
        self.scrub(id);
        let node = self
            .nodes
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        debug!("Discarded node {}", id);
        Ok(node)
    }

    /// Whether the handle is in the vertex set.
    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.vertices.contains(&id)
    }

    /// Whether the graph stores a node for this handle.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether `b` is in `a`'s adjacency set.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes
            .get(&a)
            .is_some_and(|node| node.adjacent.contains(&b))
    }

    /// Get a stored node.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// Get a node's value.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(&id).map(|node| &node.value)
    }

    /// Get a node's value (mutable).
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(&id).map(|node| &mut node.value)
    }

    /// A node's adjacency set.
    pub fn neighbors(&self, id: NodeId) -> Option<&IndexSet<NodeId>> {
        self.nodes.get(&id).map(|node| &node.adjacent)
    }

    /// Number of neighbors of a node.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(&id).map(Node::degree)
    }

    /// Vertex handles in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertices.iter().copied()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored nodes, members and non-members alike.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct undirected edges among stored nodes.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for (&id, node) in &self.nodes {
            for &other in &node.adjacent {
                // Count each pair once; an asymmetric reference still counts.
                if id <= other || !self.has_edge(other, id) {
                    count += 1;
                }
            }
        }
        count
    }

    /// True when there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn first_vertex(&self) -> Option<NodeId> {
        self.vertices.first().copied()
    }

    /// Neighbors of a node; empty for unknown handles.
    pub(crate) fn adjacent(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.adjacent.iter().copied())
    }

    /// Validate a handle used to start or end a query.
    pub(crate) fn check_query_handle(&self, id: NodeId) -> GraphResult<()> {
        self.ensure_node(id)?;
        if self.config.membership == MembershipPolicy::Strict && !self.contains_vertex(id) {
            return Err(GraphError::VertexNotFound(id));
        }
        Ok(())
    }

    /// Allocate a handle for a node already known to be valid.
    pub(crate) fn store(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId {
            graph: self.graph_id,
            index: self.next_id,
        };
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn ensure_node(&self, id: NodeId) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }

    fn link(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.adjacent.insert(to);
        }
    }

    fn unlink(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.adjacent.shift_remove(&to);
        }
    }

    /// Remove `id` from every other node's adjacency set.
    fn scrub(&mut self, id: NodeId) {
        for (&other, node) in self.nodes.iter_mut() {
            if other != id {
                node.adjacent.shift_remove(&id);
            }
        }
    }
}

impl<T: Clone> Graph<T> {
    /// Values in depth-first order from `start`.
    pub fn depth_first_search(&self, start: NodeId) -> GraphResult<Vec<T>> {
        self.traverse(start, TraversalOrder::DepthFirst)
    }

    /// Values in breadth-first order from `start`.
    pub fn breadth_first_search(&self, start: NodeId) -> GraphResult<Vec<T>> {
        self.traverse(start, TraversalOrder::BreadthFirst)
    }

    /// Values reachable from `start`, in the given order.
    pub fn traverse(&self, start: NodeId, order: TraversalOrder) -> GraphResult<Vec<T>> {
        let ids = traversal::traverse(self, start, order)?;
        Ok(self.values_of(&ids))
    }

    /// Whether a cycle exists within the configured [`CycleScope`](super::CycleScope).
    pub fn has_cycle(&self) -> GraphResult<bool> {
        cycle::has_cycle(self)
    }

    /// Values along a shortest path from `start` to `end`, both inclusive.
    /// `None` when `end` is unreachable.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> GraphResult<Option<Vec<T>>> {
        let ids = path::shortest_path(self, start, end)?;
        Ok(ids.map(|ids| self.values_of(&ids)))
    }

    /// Like [`shortest_path`](Self::shortest_path), but an unreachable target
    /// is an error.
    pub fn require_path(&self, start: NodeId, end: NodeId) -> GraphResult<Vec<T>> {
        self.shortest_path(start, end)?
            .ok_or(GraphError::UnreachableTarget { start, end })
    }

    fn values_of(&self, ids: &[NodeId]) -> Vec<T> {
        ids.iter()
            .filter_map(|&id| self.value(id).cloned())
            .collect()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
