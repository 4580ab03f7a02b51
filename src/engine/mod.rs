//! Traversal engines: sequential references and their concurrent counterparts.

pub mod bfs;
pub mod compare;
pub mod dfs;
pub mod level_bfs;
pub mod pool;
pub mod racy_dfs;

pub use bfs::{bfs_distances, sequential_bfs, sequential_bfs_order};
pub use compare::{compare, run_variant, Comparison, Variant, VariantRun, VariantTiming};
pub use dfs::{sequential_dfs, sequential_dfs_order};
pub use level_bfs::{
    level_synchronous_bfs, level_synchronous_bfs_in, level_synchronous_bfs_levels,
    level_synchronous_bfs_levels_in,
};
pub use pool::WorkerPool;
pub use racy_dfs::{
    unsynchronized_concurrent_dfs, unsynchronized_concurrent_dfs_with_ceiling, RacyDfsReport,
};
