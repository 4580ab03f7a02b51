//! Concurrent DFS with an unsynchronized check-then-mark.
//!
//! This variant exists to measure naive shared-memory parallelism. Every
//! neighbor of an explored node becomes a task; the task reads the node's
//! flag and, if it looks unvisited, explores it. The read and the later
//! write are separate operations, so two tasks can both see a node as
//! unvisited and both explore it. The result is:
//!
//! - redundant work, counted in [`RacyDfsReport::redundant_visits`];
//! - no exact visit-once guarantee, and on cyclic graphs no useful bound on
//!   how much repeated work a run may do.
//!
//! The race is deliberate. For an exactly-once concurrent traversal use
//! [`crate::engine::level_synchronous_bfs`]. To keep runs finite, a visit
//! ceiling (a multiple of `N`) stops further descent once exceeded; below
//! the ceiling the behaviour is unchanged.
//!
//! Fan-out is bounded: at most `max_in_flight` tasks are queued on the
//! pool at once. Any excess neighbor goes onto a worklist owned by the
//! worker that discovered it, which that worker drains in a loop, so stack
//! depth stays constant however long the explored chain gets.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::config::DEFAULT_VISIT_CEILING_FACTOR;
use crate::graph::{AtomicVisitTracker, Graph};
use crate::types::{NodeId, ReachedSet, SweepResult};

use super::WorkerPool;

/// Outcome of an unsynchronized concurrent DFS.
#[derive(Debug, Clone)]
pub struct RacyDfsReport {
    /// Nodes marked during the run. Best effort: when the ceiling is hit
    /// this may miss reachable nodes.
    pub reached: ReachedSet,
    /// Times any node was explored, duplicates included.
    pub visits: usize,
    /// The visit ceiling that applied to this run.
    pub ceiling: usize,
    /// Whether the ceiling cut the run short.
    pub ceiling_hit: bool,
}

impl RacyDfsReport {
    /// Explorations beyond the first per reached node.
    pub fn redundant_visits(&self) -> usize {
        self.visits.saturating_sub(self.reached.len())
    }
}

/// Concurrent DFS from `start` with the default visit ceiling.
///
/// Fails with `InvalidNode` if `start` is outside `[0, N)`.
pub fn unsynchronized_concurrent_dfs(
    graph: &Graph,
    start: NodeId,
    pool: &WorkerPool,
) -> SweepResult<RacyDfsReport> {
    unsynchronized_concurrent_dfs_with_ceiling(graph, start, pool, DEFAULT_VISIT_CEILING_FACTOR)
}

/// Concurrent DFS from `start`; descent stops once total visits exceed
/// `ceiling_factor * max(N, 1)`.
pub fn unsynchronized_concurrent_dfs_with_ceiling(
    graph: &Graph,
    start: NodeId,
    pool: &WorkerPool,
    ceiling_factor: usize,
) -> SweepResult<RacyDfsReport> {
    graph.validate(start)?;

    let ceiling = graph.size().max(1).saturating_mul(ceiling_factor.max(1));
    let sweep = RacySweep {
        graph,
        tracker: AtomicVisitTracker::new(graph.size()),
        visits: AtomicUsize::new(0),
        in_flight: AtomicUsize::new(0),
        max_in_flight: pool.max_in_flight(),
        ceiling,
        ceiling_hit: AtomicBool::new(false),
    };

    pool.scope(|scope| sweep.explore(scope, start));

    let visits = sweep.visits.load(Ordering::Acquire);
    let ceiling_hit = sweep.ceiling_hit.load(Ordering::Acquire);
    if ceiling_hit {
        log::warn!(
            "unsynchronized DFS from {} hit its visit ceiling ({} visits, ceiling {})",
            start,
            visits,
            ceiling
        );
    }

    let reached = sweep.tracker.into_reached();
    log::debug!(
        "unsynchronized DFS from {}: {} reached, {} visits",
        start,
        reached.len(),
        visits
    );

    Ok(RacyDfsReport {
        reached,
        visits,
        ceiling,
        ceiling_hit,
    })
}

struct RacySweep<'g> {
    graph: &'g Graph,
    tracker: AtomicVisitTracker,
    visits: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: usize,
    ceiling: usize,
    ceiling_hit: AtomicBool,
}

impl<'g> RacySweep<'g> {
    /// Mark `root`, then hand every neighbor to a task. Neighbors that find
    /// the pool saturated are kept on a local worklist and get the same
    /// check-then-explore step once popped.
    fn explore<'s>(&'s self, scope: &rayon::Scope<'s>, root: NodeId) {
        let mut pending: Vec<NodeId> = Vec::new();
        let mut next = Some(root);

        loop {
            let node = match next.take() {
                Some(node) => node,
                None => match pending.pop() {
                    Some(candidate) if self.tracker.peek_unsynchronized(candidate) => continue,
                    Some(candidate) => candidate,
                    None => break,
                },
            };

            self.tracker.mark_unsynchronized(node);

            let visits = self.visits.fetch_add(1, Ordering::Relaxed) + 1;
            if visits > self.ceiling {
                self.ceiling_hit.store(true, Ordering::Relaxed);
                return;
            }

            for &neighbor in self.graph.neighbors(node) {
                if self.in_flight.fetch_add(1, Ordering::Relaxed) < self.max_in_flight {
                    scope.spawn(move |scope| {
                        self.visit_if_unmarked(scope, neighbor);
                        self.in_flight.fetch_sub(1, Ordering::Relaxed);
                    });
                } else {
                    self.in_flight.fetch_sub(1, Ordering::Relaxed);
                    pending.push(neighbor);
                }
            }
        }
    }

    /// The racy step: read the flag, then explore. Another task may mark
    /// the node between the two.
    fn visit_if_unmarked<'s>(&'s self, scope: &rayon::Scope<'s>, node: NodeId) {
        if !self.tracker.peek_unsynchronized(node) {
            self.explore(scope, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SweepConfig;
    use crate::engine::sequential_dfs;
    use crate::graph::generate::{complete_graph, cycle_graph, path_graph};
    use crate::types::SweepError;

    fn pool(workers: usize) -> WorkerPool {
        WorkerPool::new(workers).unwrap()
    }

    #[test]
    fn test_single_worker_reaches_everything() {
        let g = path_graph(20).unwrap();
        let report = unsynchronized_concurrent_dfs(&g, 0, &pool(1)).unwrap();
        assert_eq!(report.reached, sequential_dfs(&g, 0).unwrap());
        assert!(!report.ceiling_hit);
    }

    #[test]
    fn test_isolated_start() {
        let g = Graph::empty(4).unwrap();
        let report = unsynchronized_concurrent_dfs(&g, 2, &pool(4)).unwrap();
        assert_eq!(report.reached.to_vec(), vec![2]);
        assert_eq!(report.visits, 1);
        assert_eq!(report.redundant_visits(), 0);
    }

    #[test]
    fn test_reached_is_subset_of_reachable() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4)]).unwrap();
        let truth = sequential_dfs(&g, 0).unwrap();
        for _ in 0..20 {
            let report = unsynchronized_concurrent_dfs(&g, 0, &pool(4)).unwrap();
            assert!(report.reached.is_subset(&truth));
            assert!(report.reached.contains(0));
            assert!(report.visits >= report.reached.len());
        }
    }

    #[test]
    fn test_dense_cyclic_graph_terminates() {
        let g = complete_graph(40).unwrap();
        let report = unsynchronized_concurrent_dfs(&g, 0, &pool(8)).unwrap();
        assert!(report.reached.contains(0));
        assert!(report.visits >= report.reached.len());
    }

    #[test]
    fn test_tight_ceiling_is_reported() {
        let g = cycle_graph(50).unwrap();
        let p = WorkerPool::from_config(&SweepConfig::new().with_workers(2)).unwrap();
        // Any duplicate exploration pushes visits past N and trips the cut.
        let report = unsynchronized_concurrent_dfs_with_ceiling(&g, 0, &p, 1).unwrap();
        assert_eq!(report.ceiling, 50);
        assert_eq!(report.ceiling_hit, report.visits > 50);
    }

    #[test]
    fn test_saturated_pool_long_path_keeps_constant_stack() {
        // 256 KiB worker stacks; a frame per path node would exhaust them.
        let g = path_graph(200_000).unwrap();
        let config = SweepConfig::new()
            .with_workers(2)
            .with_max_in_flight(0)
            .with_stack_size(256 * 1024);
        let p = WorkerPool::from_config(&config).unwrap();
        let report = unsynchronized_concurrent_dfs(&g, 0, &p).unwrap();
        assert_eq!(report.reached.len(), 200_000);
        assert_eq!(report.visits, 200_000);
        assert!(!report.ceiling_hit);
    }

    #[test]
    fn test_saturated_pool_runs_on_worklist() {
        let g = path_graph(500).unwrap();
        let p = WorkerPool::from_config(&SweepConfig::new().with_workers(2).with_max_in_flight(0))
            .unwrap();
        let report = unsynchronized_concurrent_dfs(&g, 0, &p).unwrap();
        assert_eq!(report.reached.len(), 500);
        assert_eq!(report.visits, 500);
    }

    #[test]
    fn test_invalid_start() {
        let g = path_graph(3).unwrap();
        assert!(matches!(
            unsynchronized_concurrent_dfs(&g, 3, &pool(2)),
            Err(SweepError::InvalidNode(3))
        ));
    }
}
