//! Graph traversal algorithms (DFS, BFS).

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Frontier discipline for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Last-in-first-out frontier.
    DepthFirst,
    /// First-in-first-out frontier.
    BreadthFirst,
}

/// Visit every node reachable from `start`, returning handles in the order
/// they leave the frontier.
///
/// Nodes are marked seen when they enter the frontier, so each one is
/// visited exactly once. Neighbors are pushed in adjacency insertion order.
pub fn traverse<T>(
    graph: &Graph<T>,
    start: NodeId,
    order: TraversalOrder,
) -> GraphResult<Vec<NodeId>> {
    graph.check_query_handle(start)?;

    let mut visited_order: Vec<NodeId> = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut frontier: VecDeque<NodeId> = VecDeque::new();

    seen.insert(start);
    frontier.push_back(start);

    loop {
        let next = match order {
            TraversalOrder::DepthFirst => frontier.pop_back(),
            TraversalOrder::BreadthFirst => frontier.pop_front(),
        };
        let Some(current) = next else { break };

        visited_order.push(current);
        for neighbor in graph.adjacent(current) {
            if seen.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    trace!(
        "{:?} from {} visited {} node(s)",
        order,
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

/// Depth-first traversal from `start`.
pub fn depth_first<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    traverse(graph, start, TraversalOrder::DepthFirst)
}

/// Breadth-first traversal from `start`.
pub fn breadth_first<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    traverse(graph, start, TraversalOrder::BreadthFirst)
}
