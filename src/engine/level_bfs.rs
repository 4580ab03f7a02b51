//! Level-synchronous concurrent BFS.
//!
//! Each level's frontier is split into at most `workers` contiguous chunks.
//! A worker walks its chunk's neighbors and claims each one with a single
//! atomic swap on the shared tracker; successful claims go to a buffer
//! owned by that worker. Once every chunk is done (the level barrier) the
//! buffers are concatenated in chunk order to form the next frontier.
//!
//! The swap makes claiming exactly-once, so every node enters exactly one
//! frontier, at the level equal to its hop distance from the start.
//! Which worker wins a contested claim, and the order inside a level, are
//! not deterministic; the set of nodes per level is.

use rayon::prelude::*;

use crate::graph::{AtomicVisitTracker, Graph};
use crate::types::{Levels, NodeId, ReachedSet, SweepResult};

use super::WorkerPool;

/// Level-synchronous BFS from `start` on a fresh pool of `worker_count`
/// threads (0 = hardware parallelism).
///
/// Fails with `InvalidNode` if `start` is outside `[0, N)`.
pub fn level_synchronous_bfs(
    graph: &Graph,
    start: NodeId,
    worker_count: usize,
) -> SweepResult<ReachedSet> {
    graph.validate(start)?;
    let pool = WorkerPool::new(worker_count)?;
    level_synchronous_bfs_in(&pool, graph, start)
}

/// Level-synchronous BFS on an existing pool.
pub fn level_synchronous_bfs_in(
    pool: &WorkerPool,
    graph: &Graph,
    start: NodeId,
) -> SweepResult<ReachedSet> {
    graph.validate(start)?;
    Ok(sweep(pool, graph, start, None).into_reached())
}

/// Level-synchronous BFS returning the nodes claimed at each level.
pub fn level_synchronous_bfs_levels(
    graph: &Graph,
    start: NodeId,
    worker_count: usize,
) -> SweepResult<Levels> {
    graph.validate(start)?;
    let pool = WorkerPool::new(worker_count)?;
    level_synchronous_bfs_levels_in(&pool, graph, start)
}

/// Per-level variant on an existing pool.
pub fn level_synchronous_bfs_levels_in(
    pool: &WorkerPool,
    graph: &Graph,
    start: NodeId,
) -> SweepResult<Levels> {
    graph.validate(start)?;
    let mut levels = Levels::new();
    sweep(pool, graph, start, Some(&mut levels));
    Ok(levels)
}

fn sweep(
    pool: &WorkerPool,
    graph: &Graph,
    start: NodeId,
    mut levels: Option<&mut Levels>,
) -> AtomicVisitTracker {
    let tracker = AtomicVisitTracker::new(graph.size());
    tracker.claim(start);

    let workers = pool.workers().max(1);
    let mut frontier: Vec<NodeId> = vec![start];
    let mut depth = 0usize;

    while !frontier.is_empty() {
        log::debug!("level {}: expanding {} nodes", depth, frontier.len());

        let chunk_size = frontier.len().div_ceil(workers);
        // collect() returns only after every chunk finishes: the level barrier.
        let buffers: Vec<Vec<NodeId>> = pool.install(|| {
            frontier
                .par_chunks(chunk_size)
                .map(|chunk| expand_chunk(graph, &tracker, chunk))
                .collect()
        });
        let next: Vec<NodeId> = buffers.into_iter().flatten().collect();

        let finished = std::mem::replace(&mut frontier, next);
        if let Some(levels) = levels.as_deref_mut() {
            levels.push(finished);
        }
        depth += 1;
    }

    log::debug!(
        "level-synchronous BFS from {}: {} levels, {} claimed",
        start,
        depth,
        tracker.marked_count()
    );
    tracker
}

/// One worker's share of a level. The buffer is private to the worker.
fn expand_chunk(graph: &Graph, tracker: &AtomicVisitTracker, chunk: &[NodeId]) -> Vec<NodeId> {
    let mut local = Vec::new();
    for &node in chunk {
        for &neighbor in graph.neighbors(node) {
            if tracker.claim(neighbor) {
                local.push(neighbor);
            }
        }
    }
    local
}
