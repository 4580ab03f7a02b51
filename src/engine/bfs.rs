//! Sequential breadth-first search with an explicit FIFO frontier.

use std::collections::VecDeque;

use crate::graph::{Graph, VisitMarks};
use crate::types::{NodeId, ReachedSet, SweepResult};

/// Breadth-first search from `start`.
///
/// Fails with `InvalidNode` if `start` is outside `[0, N)`.
pub fn sequential_bfs(graph: &Graph, start: NodeId) -> SweepResult<ReachedSet> {
    graph.validate(start)?;
    let (marks, _) = walk(graph, start);
    Ok(marks.into_reached())
}

/// Breadth-first search from `start`, returning nodes in dequeue order.
pub fn sequential_bfs_order(graph: &Graph, start: NodeId) -> SweepResult<Vec<NodeId>> {
    graph.validate(start)?;
    let (_, order) = walk(graph, start);
    Ok(order)
}

/// Hop distance from `start` to every node; `None` when unreachable.
pub fn bfs_distances(graph: &Graph, start: NodeId) -> SweepResult<Vec<Option<u32>>> {
    graph.validate(start)?;

    let mut distances: Vec<Option<u32>> = vec![None; graph.size()];
    let mut queue = VecDeque::new();
    distances[start as usize] = Some(0);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let next = distances[node as usize].map_or(0, |d| d + 1);
        for &neighbor in graph.neighbors(node) {
            if distances[neighbor as usize].is_none() {
                distances[neighbor as usize] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(distances)
}

/// Nodes are marked when pushed, so each enters the queue once.
fn walk(graph: &Graph, start: NodeId) -> (VisitMarks, Vec<NodeId>) {
    let mut marks = VisitMarks::new(graph.size());
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    marks.mark(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &neighbor in graph.neighbors(node) {
            if marks.mark(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    (marks, order)
}
