//! Writes .sweep files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::SweepResult;
use crate::types::header::FileHeader;

use super::compression::compress_payload;

/// Size of a single edge record inside the payload: two u32 endpoints.
pub const EDGE_RECORD_SIZE: usize = 8;

/// Writer for .sweep binary files.
pub struct GraphWriter;

impl GraphWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write a graph to a .sweep file.
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> SweepResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        log::info!(
            "wrote {} ({} nodes, {} edges)",
            path.display(),
            graph.size(),
            graph.edge_count()
        );
        Ok(())
    }

    /// Write a graph to any writer.
    ///
    /// Layout: 32-byte header, then the LZ4-compressed edge list in the
    /// order the graph was built from, so reading it back reproduces every
    /// adjacency order exactly.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> SweepResult<()> {
        let edges = graph.edges();
        let mut raw = Vec::with_capacity(edges.len() * EDGE_RECORD_SIZE);
        for &(u, v) in edges {
            raw.extend_from_slice(&u.to_le_bytes());
            raw.extend_from_slice(&v.to_le_bytes());
        }
        let payload = compress_payload(&raw);

        let header = FileHeader::new(
            graph.size() as u64,
            edges.len() as u64,
            payload.len() as u64,
        );
        header.write_to(writer)?;
        writer.write_all(&payload)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for GraphWriter {
    fn default() -> Self {
        Self::new()
    }
}
