//! All data types for the graph-sweep library.

pub mod error;
pub mod header;
pub mod reached;

pub use error::{SweepError, SweepResult};
pub use header::{FileHeader, HEADER_SIZE};
pub use reached::{Levels, ReachedSet};

/// Dense node identifier in `[0, N)`.
pub type NodeId = u32;

/// Magic bytes at the start of every .sweep file.
pub const SWEEP_MAGIC: [u8; 4] = [0x53, 0x57, 0x45, 0x50]; // "SWEP"

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Largest node count addressable by a [`NodeId`].
pub const MAX_NODES: usize = u32::MAX as usize;

/// Default cap on the node count accepted when loading a graph from a file.
/// Offsets alone cost 8 bytes per node, so 2^26 nodes is about 1 GiB of
/// adjacency bookkeeping before a single edge is stored.
pub const DEFAULT_MAX_LOAD_NODES: usize = 1 << 26;

/// Returns the current UTC time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
