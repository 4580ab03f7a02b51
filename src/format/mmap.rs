//! Memory-mapped access to .sweep files.

use std::path::Path;

use memmap2::Mmap;

use crate::graph::Graph;
use crate::types::error::{SweepError, SweepResult};
use crate::types::header::{FileHeader, HEADER_SIZE};
use crate::types::DEFAULT_MAX_LOAD_NODES;

use super::reader::decode;

/// Read-only memory-mapped access to a .sweep file.
///
/// Opening only validates the header; the edge payload is decoded when
/// [`MmapGraphReader::load`] is called.
pub struct MmapGraphReader {
    mmap: Mmap,
    header: FileHeader,
}

impl MmapGraphReader {
    /// Open a .sweep file for memory-mapped read access.
    pub fn open(path: &Path) -> SweepResult<Self> {
        let file = std::fs::File::open(path)?;
        // SAFETY: the map is read-only and the file is not modified while mapped.
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < HEADER_SIZE as usize {
            return Err(SweepError::Truncated);
        }
        let header = FileHeader::parse(&mmap[..HEADER_SIZE as usize])?;

        Ok(Self { mmap, header })
    }

    /// Get the file header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Node count recorded in the header.
    pub fn node_count(&self) -> u64 {
        self.header.node_count
    }

    /// Edge count recorded in the header.
    pub fn edge_count(&self) -> u64 {
        self.header.edge_count
    }

    /// Total mapped size in bytes.
    pub fn file_size(&self) -> usize {
        self.mmap.len()
    }

    /// Decode the full graph from the mapped bytes.
    pub fn load(&self) -> SweepResult<Graph> {
        self.load_limited(DEFAULT_MAX_LOAD_NODES)
    }

    /// Decode the full graph, refusing more than `max_nodes` nodes.
    pub fn load_limited(&self, max_nodes: usize) -> SweepResult<Graph> {
        decode(&self.mmap, max_nodes)
    }
}
