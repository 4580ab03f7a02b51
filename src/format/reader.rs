//! Reads .sweep files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::{SweepError, SweepResult};
use crate::types::header::{FileHeader, HEADER_SIZE};
use crate::types::{NodeId, DEFAULT_MAX_LOAD_NODES, MAX_NODES};

use super::compression::decompress_payload;
use super::writer::EDGE_RECORD_SIZE;

/// Reader for .sweep binary files.
///
/// Headers announcing more than [`DEFAULT_MAX_LOAD_NODES`] nodes are refused
/// with [`SweepError::TooLarge`]; the `_limited` variants take an explicit cap.
pub struct GraphReader;

impl GraphReader {
    /// Read a .sweep file into a Graph.
    pub fn read_from_file(path: &Path) -> SweepResult<Graph> {
        Self::read_from_file_limited(path, DEFAULT_MAX_LOAD_NODES)
    }

    /// Read a .sweep file, refusing graphs of more than `max_nodes` nodes.
    pub fn read_from_file_limited(path: &Path, max_nodes: usize) -> SweepResult<Graph> {
        let data = std::fs::read(path)?;
        let graph = decode(&data, max_nodes)?;
        log::info!(
            "loaded {} ({} nodes, {} edges)",
            path.display(),
            graph.size(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> SweepResult<Graph> {
        Self::read_from_limited(reader, DEFAULT_MAX_LOAD_NODES)
    }

    /// Read from any reader, refusing graphs of more than `max_nodes` nodes.
    pub fn read_from_limited(reader: &mut impl Read, max_nodes: usize) -> SweepResult<Graph> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        decode(&data, max_nodes)
    }
}

/// Decode a complete .sweep image (header + payload).
pub(crate) fn decode(data: &[u8], max_nodes: usize) -> SweepResult<Graph> {
    let header = FileHeader::parse(data)?;

    if header.node_count > MAX_NODES as u64 {
        return Err(SweepError::Corrupt(8));
    }
    if header.node_count > max_nodes as u64 {
        return Err(SweepError::TooLarge {
            node_count: header.node_count,
            limit: max_nodes as u64,
        });
    }
    let node_count = header.node_count as usize;

    let payload_start = HEADER_SIZE as usize;
    let payload_end = payload_start
        .checked_add(header.payload_len as usize)
        .ok_or(SweepError::Corrupt(24))?;
    if payload_end > data.len() {
        return Err(SweepError::Truncated);
    }

    let raw = decompress_payload(&data[payload_start..payload_end])?;
    let expected = (header.edge_count as usize)
        .checked_mul(EDGE_RECORD_SIZE)
        .ok_or(SweepError::Corrupt(16))?;
    if raw.len() != expected {
        return Err(SweepError::Corrupt(HEADER_SIZE));
    }

    let edges: Vec<(NodeId, NodeId)> = raw
        .chunks_exact(EDGE_RECORD_SIZE)
        .map(|rec| {
            let u = NodeId::from_le_bytes([rec[0], rec[1], rec[2], rec[3]]);
            let v = NodeId::from_le_bytes([rec[4], rec[5], rec[6], rec[7]]);
            (u, v)
        })
        .collect();

    Graph::from_edges(node_count, &edges)
}
