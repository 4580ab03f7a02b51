//! Runtime configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{SweepError, SweepResult, DEFAULT_MAX_LOAD_NODES};

/// Default cap on queued fan-out tasks for the unsynchronized DFS.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 1024;

/// Default visit ceiling for the unsynchronized DFS, as a multiple of `N`.
pub const DEFAULT_VISIT_CEILING_FACTOR: usize = 8;

/// Default worker thread stack size: 32 MiB.
pub const DEFAULT_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Smallest accepted worker stack size: 64 KiB.
pub const MIN_STACK_SIZE: usize = 64 * 1024;

/// Seed used for generated graphs when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Traversal and worker-pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Worker threads. 0 means available hardware parallelism.
    pub workers: usize,

    /// Maximum queued fan-out tasks before the unsynchronized DFS keeps
    /// further neighbors on the discovering worker's own worklist.
    pub max_in_flight: usize,

    /// Visit ceiling for the unsynchronized DFS, as a multiple of `N`.
    pub visit_ceiling_factor: usize,

    /// Stack size of each worker thread, in bytes.
    pub stack_size_bytes: usize,

    /// Seed for generated graphs.
    pub seed: u64,

    /// Largest node count accepted when loading a graph file.
    pub max_load_nodes: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            visit_ceiling_factor: DEFAULT_VISIT_CEILING_FACTOR,
            stack_size_bytes: DEFAULT_STACK_SIZE,
            seed: DEFAULT_SEED,
            max_load_nodes: DEFAULT_MAX_LOAD_NODES,
        }
    }
}

impl SweepConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker count (0 = hardware parallelism).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the fan-out task cap.
    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max;
        self
    }

    /// Set the visit ceiling factor.
    pub fn with_visit_ceiling_factor(mut self, factor: usize) -> Self {
        self.visit_ceiling_factor = factor;
        self
    }

    /// Set the worker stack size.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size_bytes = bytes;
        self
    }

    /// Set the node-count cap for loaded graph files.
    pub fn with_max_load_nodes(mut self, max: usize) -> Self {
        self.max_load_nodes = max;
        self
    }

    /// Set the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Worker count with 0 resolved to the machine's available parallelism.
    pub fn resolved_workers(&self) -> usize {
        resolve_workers(self.workers)
    }

    /// Reject values no traversal can run with.
    pub fn validate(&self) -> SweepResult<()> {
        if self.visit_ceiling_factor == 0 {
            return Err(SweepError::Config(
                "visit_ceiling_factor must be at least 1".to_string(),
            ));
        }
        if self.stack_size_bytes < MIN_STACK_SIZE {
            return Err(SweepError::Config(format!(
                "stack_size_bytes must be at least {}, got {}",
                MIN_STACK_SIZE, self.stack_size_bytes
            )));
        }
        Ok(())
    }

    /// Load from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> SweepResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|e| SweepError::Config(e.to_string()))?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save as TOML.
    pub fn save(&self, path: &Path) -> SweepResult<()> {
        let text = toml::to_string_pretty(self).map_err(|e| SweepError::Config(e.to_string()))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Resolve a worker count, mapping 0 to the available parallelism.
pub fn resolve_workers(workers: usize) -> usize {
    if workers > 0 {
        return workers;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
