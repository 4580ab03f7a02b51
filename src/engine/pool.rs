//! Fixed-size worker pool shared by the concurrent traversals.

use crate::config::SweepConfig;
use crate::types::SweepResult;

/// A fixed-size thread pool plus the fan-out cap the unsynchronized DFS
/// applies when submitting tasks to it.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
    max_in_flight: usize,
}

impl WorkerPool {
    /// Build a pool with `workers` threads (0 = hardware parallelism) and
    /// default settings otherwise.
    pub fn new(workers: usize) -> SweepResult<Self> {
        Self::from_config(&SweepConfig::default().with_workers(workers))
    }

    /// Build a pool from a configuration.
    pub fn from_config(config: &SweepConfig) -> SweepResult<Self> {
        config.validate()?;
        let workers = config.resolved_workers();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .stack_size(config.stack_size_bytes)
            .thread_name(|i| format!("gsweep-worker-{}", i))
            .build()?;
        log::info!(
            "worker pool ready: {} threads, max {} in-flight tasks",
            workers,
            config.max_in_flight
        );
        Ok(Self {
            pool,
            workers,
            max_in_flight: config.max_in_flight,
        })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Maximum queued fan-out tasks.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Run `op` inside the pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Open a task scope inside the pool. Returns once every spawned task
    /// has finished.
    pub fn scope<'scope, OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce(&rayon::Scope<'scope>) -> R + Send,
        R: Send,
    {
        self.pool.scope(op)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.workers)
            .field("max_in_flight", &self.max_in_flight)
            .finish()
    }
}
