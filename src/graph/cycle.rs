//! Cycle detection.
//!
//! A stack search that marks a node seen when it is popped, and only pushes
//! neighbors not yet seen. The node a popped vertex was reached from is
//! already seen, so the reverse of a tree edge is never pushed. A cycle is
//! reported when a node is popped a second time: two distinct visited nodes
//! both reached it, or it has an edge to itself.

use std::collections::HashSet;

use log::trace;

use crate::types::{GraphError, GraphResult, NodeId};

use super::config::CycleScope;
use super::Graph;

/// Whether the graph has a cycle within its configured [`CycleScope`].
///
/// Fails with [`GraphError::EmptyGraph`] when there are no vertices.
pub fn has_cycle<T>(graph: &Graph<T>) -> GraphResult<bool> {
    let first = graph.first_vertex().ok_or(GraphError::EmptyGraph)?;
    let mut seen: HashSet<NodeId> = HashSet::new();

    let found = match graph.config().cycle_scope {
        CycleScope::FirstVertex => search(graph, first, &mut seen),
        CycleScope::AllComponents => graph
            .vertices()
            .any(|v| !seen.contains(&v) && search(graph, v, &mut seen)),
    };

    trace!("Cycle search over {} node(s): {}", seen.len(), found);
    Ok(found)
}

/// Whether a cycle is reachable from `start`.
pub fn has_cycle_from<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<bool> {
    graph.check_query_handle(start)?;
    Ok(search(graph, start, &mut HashSet::new()))
}

fn search<T>(graph: &Graph<T>, start: NodeId, seen: &mut HashSet<NodeId>) -> bool {
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        if seen.contains(&current) {
            return true;
        }
        for neighbor in graph.adjacent(current) {
            if !seen.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
        seen.insert(current);
    }
    false
}
