//! Error types for the graph-sweep library.

use thiserror::Error;

/// All errors that can occur in the graph-sweep library.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Start node (or another caller-supplied node) is outside `[0, N)`.
    #[error("Invalid node ID: {0}")]
    InvalidNode(i64),

    /// Edge list references a node outside `[0, N)`.
    #[error("Edge endpoint {node} out of range for graph with {node_count} nodes")]
    OutOfRange { node: u64, node_count: usize },

    /// Node count beyond what the graph store or the loader accepts.
    #[error("Graph of {node_count} nodes exceeds the limit of {limit}")]
    TooLarge { node_count: u64, limit: u64 },

    /// Graph storage could not be allocated.
    #[error("Cannot allocate graph storage: {0}")]
    Allocation(String),

    /// Invalid magic bytes in file header.
    #[error("Invalid magic bytes in file header")]
    InvalidMagic,

    /// Unsupported format version.
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Compression error.
    #[error("Compression error: {0}")]
    Compression(String),

    /// File is empty or truncated.
    #[error("File is empty or truncated")]
    Truncated,

    /// Corrupt data at a given offset.
    #[error("Corrupt data at offset {0}")]
    Corrupt(u64),

    /// Malformed line in a text edge list.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Worker pool could not be built.
    #[error("Worker pool error: {0}")]
    Pool(String),
}

impl From<rayon::ThreadPoolBuildError> for SweepError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        SweepError::Pool(e.to_string())
    }
}

/// Convenience result type for graph-sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;
