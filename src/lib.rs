//! graph-sweep: sequential and parallel traversal of static undirected graphs.
//!
//! Four traversals share one immutable [`Graph`]:
//!
//! - [`sequential_dfs`] and [`sequential_bfs`], the single-threaded references;
//! - [`unsynchronized_concurrent_dfs`], a fan-out DFS whose check-then-mark is
//!   deliberately not atomic, so it may explore a node more than once;
//! - [`level_synchronous_bfs`], which claims each node with one atomic swap
//!   and synchronizes workers at every level.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::SweepConfig;
pub use engine::{
    bfs_distances, compare, level_synchronous_bfs, level_synchronous_bfs_in,
    level_synchronous_bfs_levels, level_synchronous_bfs_levels_in, run_variant, sequential_bfs,
    sequential_bfs_order, sequential_dfs, sequential_dfs_order, unsynchronized_concurrent_dfs,
    unsynchronized_concurrent_dfs_with_ceiling, Comparison, RacyDfsReport, Variant, WorkerPool,
};
pub use format::{GraphReader, GraphWriter, MmapGraphReader};
pub use graph::{AtomicVisitTracker, Graph, GraphBuilder, Shape, VisitMarks};
pub use types::{Levels, NodeId, ReachedSet, SweepError, SweepResult};
