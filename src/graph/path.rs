//! Unweighted shortest paths.

use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;

use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Shortest path from `start` to `end`, both inclusive, found by BFS.
///
/// Returns `Ok(None)` when `end` is not reachable. Predecessors are tracked
/// per handle, so vertices holding equal values never get confused.
pub fn shortest_path<T>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Option<Vec<NodeId>>> {
    graph.check_query_handle(start)?;
    graph.check_query_handle(end)?;

    if start == end {
        return Ok(Some(vec![start]));
    }

    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let path = reconstruct(&predecessors, start, end);
            trace!("Path {} -> {}: {} hop(s)", start, end, path.len() - 1);
            return Ok(Some(path));
        }

        for neighbor in graph.adjacent(current) {
            if seen.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    trace!("Path {} -> {}: unreachable", start, end);
    Ok(None)
}

/// Walk predecessors back from `end` to `start`.
fn reconstruct(predecessors: &HashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        match predecessors.get(&cursor) {
            Some(&prev) => {
                path.push(prev);
                cursor = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
