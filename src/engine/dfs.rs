//! Sequential depth-first search, the reachability reference.

use crate::graph::{Graph, VisitMarks};
use crate::types::{NodeId, ReachedSet, SweepResult};

/// Depth-first search from `start`.
///
/// Fails with `InvalidNode` if `start` is outside `[0, N)`.
pub fn sequential_dfs(graph: &Graph, start: NodeId) -> SweepResult<ReachedSet> {
    graph.validate(start)?;
    let (marks, _) = walk(graph, start);
    Ok(marks.into_reached())
}

/// Depth-first search from `start`, returning nodes in pre-order.
pub fn sequential_dfs_order(graph: &Graph, start: NodeId) -> SweepResult<Vec<NodeId>> {
    graph.validate(start)?;
    let (_, order) = walk(graph, start);
    Ok(order)
}

/// Pre-order walk with an explicit stack of `(node, next neighbor index)`
/// frames. Visits exactly the order the recursive formulation would:
/// a node is marked before its first neighbor is inspected, and each
/// unvisited neighbor is fully explored before the next one is looked at.
fn walk(graph: &Graph, start: NodeId) -> (VisitMarks, Vec<NodeId>) {
    let mut marks = VisitMarks::new(graph.size());
    let mut order = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    marks.mark(start);
    order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let neighbors = graph.neighbors(node);
        if next >= neighbors.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let neighbor = neighbors[next];
        if marks.mark(neighbor) {
            order.push(neighbor);
            stack.push((neighbor, 0));
        }
    }

    (marks, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::{cycle_graph, path_graph};
    use crate::types::SweepError;

    #[test]
    fn test_dfs_preorder() {
        // 0 - 1 - 2 - 3 with chord 0 - 2
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        assert_eq!(sequential_dfs_order(&g, 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        // 0 has children 1 and 2; 1 has child 3
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3)]).unwrap();
        assert_eq!(sequential_dfs_order(&g, 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_long_path_does_not_overflow() {
        let g = path_graph(200_000).unwrap();
        assert_eq!(sequential_dfs(&g, 0).unwrap().len(), 200_000);
    }

    #[test]
    fn test_dfs_cycle_terminates() {
        let g = cycle_graph(10).unwrap();
        assert_eq!(sequential_dfs_order(&g, 0).unwrap().len(), 10);
    }

    #[test]
    fn test_dfs_self_loop() {
        let g = Graph::from_edges(2, &[(0, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(sequential_dfs_order(&g, 0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_dfs_invalid_start() {
        let g = path_graph(3).unwrap();
        assert!(matches!(
            sequential_dfs(&g, 3),
            Err(SweepError::InvalidNode(3))
        ));
    }
}
