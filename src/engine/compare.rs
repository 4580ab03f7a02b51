//! Side-by-side timing of the four traversal variants.

use std::time::Instant;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{NodeId, ReachedSet, SweepError, SweepResult};

use super::{
    level_synchronous_bfs_in, sequential_bfs, sequential_dfs, unsynchronized_concurrent_dfs,
    WorkerPool,
};

/// A traversal variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Single-threaded DFS.
    SequentialDfs,
    /// Concurrent DFS with the unsynchronized check-then-mark.
    UnsynchronizedDfs,
    /// Single-threaded BFS.
    SequentialBfs,
    /// Level-synchronous concurrent BFS.
    LevelSynchronousBfs,
}

impl Variant {
    /// All variants in reporting order.
    pub const ALL: [Variant; 4] = [
        Variant::SequentialDfs,
        Variant::UnsynchronizedDfs,
        Variant::SequentialBfs,
        Variant::LevelSynchronousBfs,
    ];

    /// Return the CLI name for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SequentialDfs => "seq-dfs",
            Self::UnsynchronizedDfs => "racy-dfs",
            Self::SequentialBfs => "seq-bfs",
            Self::LevelSynchronousBfs => "level-bfs",
        }
    }

    /// Parse a variant from its CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "seq-dfs" | "dfs" => Some(Self::SequentialDfs),
            "racy-dfs" | "par-dfs" => Some(Self::UnsynchronizedDfs),
            "seq-bfs" | "bfs" => Some(Self::SequentialBfs),
            "level-bfs" | "par-bfs" => Some(Self::LevelSynchronousBfs),
            _ => None,
        }
    }

    /// Whether this variant guarantees the exact reached set.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::UnsynchronizedDfs)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one traversal run.
#[derive(Debug, Clone)]
pub struct VariantRun {
    /// Reached set (best effort for the unsynchronized DFS).
    pub reached: ReachedSet,
    /// Duplicate explorations, only tracked by the unsynchronized DFS.
    pub redundant_visits: Option<usize>,
    /// Whether the unsynchronized DFS hit its visit ceiling.
    pub ceiling_hit: bool,
}

/// Run a single variant.
pub fn run_variant(
    variant: Variant,
    graph: &Graph,
    start: NodeId,
    pool: &WorkerPool,
) -> SweepResult<VariantRun> {
    let run = match variant {
        Variant::SequentialDfs => exact(sequential_dfs(graph, start)?),
        Variant::SequentialBfs => exact(sequential_bfs(graph, start)?),
        Variant::LevelSynchronousBfs => exact(level_synchronous_bfs_in(pool, graph, start)?),
        Variant::UnsynchronizedDfs => {
            let report = unsynchronized_concurrent_dfs(graph, start, pool)?;
            VariantRun {
                redundant_visits: Some(report.redundant_visits()),
                ceiling_hit: report.ceiling_hit,
                reached: report.reached,
            }
        }
    };
    Ok(run)
}

fn exact(reached: ReachedSet) -> VariantRun {
    VariantRun {
        reached,
        redundant_visits: None,
        ceiling_hit: false,
    }
}

/// Timing summary for one variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantTiming {
    /// Which variant.
    pub variant: Variant,
    /// Fastest round, in milliseconds.
    pub best_ms: f64,
    /// Mean over all rounds, in milliseconds.
    pub mean_ms: f64,
    /// Reached-set size of the last round.
    pub reached: usize,
    /// Duplicate explorations in the last round (unsynchronized DFS only).
    pub redundant_visits: Option<usize>,
    /// Whether any round hit the visit ceiling.
    pub ceiling_hit: bool,
}

/// Timings for all variants from one start node.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Start node.
    pub start: NodeId,
    /// Worker threads in the pool.
    pub workers: usize,
    /// Rounds per variant.
    pub rounds: usize,
    /// One entry per variant, in [`Variant::ALL`] order.
    pub timings: Vec<VariantTiming>,
    /// Whether every exact variant produced the same reached set.
    pub exact_sets_agree: bool,
}

/// Time every variant over `rounds` runs and check the exact variants agree.
pub fn compare(
    graph: &Graph,
    start: NodeId,
    pool: &WorkerPool,
    rounds: usize,
) -> SweepResult<Comparison> {
    if rounds == 0 {
        return Err(SweepError::Config("rounds must be at least 1".to_string()));
    }
    graph.validate(start)?;

    let mut timings = Vec::with_capacity(Variant::ALL.len());
    let mut reference: Option<ReachedSet> = None;
    let mut exact_sets_agree = true;

    for variant in Variant::ALL {
        let mut total_ms = 0.0f64;
        let mut best_ms = f64::INFINITY;
        let mut ceiling_hit = false;
        let mut last: Option<VariantRun> = None;

        for _ in 0..rounds {
            let began = Instant::now();
            let run = run_variant(variant, graph, start, pool)?;
            let ms = began.elapsed().as_secs_f64() * 1000.0;
            total_ms += ms;
            best_ms = best_ms.min(ms);
            ceiling_hit |= run.ceiling_hit;

            if variant.is_exact() {
                match &reference {
                    Some(r) => exact_sets_agree &= *r == run.reached,
                    None => reference = Some(run.reached.clone()),
                }
            }
            last = Some(run);
        }

        let (reached, redundant_visits) = last
            .map(|run| (run.reached.len(), run.redundant_visits))
            .unwrap_or((0, None));
        log::info!(
            "{}: best {:.3} ms over {} rounds, {} reached",
            variant,
            best_ms,
            rounds,
            reached
        );

        timings.push(VariantTiming {
            variant,
            best_ms,
            mean_ms: total_ms / rounds as f64,
            reached,
            redundant_visits,
            ceiling_hit,
        });
    }

    Ok(Comparison {
        start,
        workers: pool.workers(),
        rounds,
        timings,
        exact_sets_agree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::random_graph;

    #[test]
    fn test_variant_names() {
        for v in Variant::ALL {
            assert_eq!(Variant::from_name(v.name()), Some(v));
        }
        assert_eq!(Variant::from_name("bogus"), None);
        assert!(!Variant::UnsynchronizedDfs.is_exact());
    }

    #[test]
    fn test_compare_random_graph() {
        let g = random_graph(200, 0.05, 3).unwrap();
        let pool = WorkerPool::new(4).unwrap();
        let cmp = compare(&g, 0, &pool, 2).unwrap();
        assert_eq!(cmp.timings.len(), 4);
        assert!(cmp.exact_sets_agree);
        assert_eq!(cmp.timings[0].reached, cmp.timings[2].reached);
        assert_eq!(cmp.timings[2].reached, cmp.timings[3].reached);
        assert!(cmp.timings[1].redundant_visits.is_some());
        assert!(cmp.timings[0].redundant_visits.is_none());
    }

    #[test]
    fn test_compare_zero_rounds() {
        let g = random_graph(5, 0.5, 1).unwrap();
        let pool = WorkerPool::new(1).unwrap();
        assert!(matches!(
            compare(&g, 0, &pool, 0),
            Err(SweepError::Config(_))
        ));
    }
}
