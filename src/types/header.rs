//! File header for .sweep binary graph files.

use std::io::{Read, Write};

use crate::types::error::{SweepError, SweepResult};
use crate::types::{FORMAT_VERSION, SWEEP_MAGIC};

/// Header of a .sweep file. Fixed size: 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic bytes: [0x53, 0x57, 0x45, 0x50] ("SWEP").
    pub magic: [u8; 4],
    /// Format version (currently 1).
    pub version: u32,
    /// Number of nodes in the graph.
    pub node_count: u64,
    /// Number of undirected edges in the payload.
    pub edge_count: u64,
    /// Length in bytes of the compressed edge payload that follows.
    pub payload_len: u64,
}

/// The fixed size of a FileHeader on disk: 32 bytes.
pub const HEADER_SIZE: u64 = 32;

impl FileHeader {
    /// Create a header for a graph of the given shape.
    pub fn new(node_count: u64, edge_count: u64, payload_len: u64) -> Self {
        Self {
            magic: SWEEP_MAGIC,
            version: FORMAT_VERSION,
            node_count,
            edge_count,
            payload_len,
        }
    }

    /// Write this header to the given writer. Writes exactly 32 bytes.
    ///
    /// Layout (all little-endian):
    /// - 0x00..0x04: magic (4 bytes)
    /// - 0x04..0x08: version (u32)
    /// - 0x08..0x10: node_count (u64)
    /// - 0x10..0x18: edge_count (u64)
    /// - 0x18..0x20: payload_len (u64)
    pub fn write_to(&self, writer: &mut impl Write) -> SweepResult<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.node_count.to_le_bytes())?;
        writer.write_all(&self.edge_count.to_le_bytes())?;
        writer.write_all(&self.payload_len.to_le_bytes())?;
        Ok(())
    }

    /// Read a header from the given reader. Reads exactly 32 bytes.
    pub fn read_from(reader: &mut impl Read) -> SweepResult<Self> {
        let mut buf = [0u8; HEADER_SIZE as usize];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                SweepError::Truncated
            } else {
                SweepError::Io(e)
            }
        })?;
        Self::parse(&buf)
    }

    /// Parse a header from the first 32 bytes of `buf`.
    pub fn parse(buf: &[u8]) -> SweepResult<Self> {
        if buf.len() < HEADER_SIZE as usize {
            return Err(SweepError::Truncated);
        }

        let magic = [buf[0], buf[1], buf[2], buf[3]];
        if magic != SWEEP_MAGIC {
            return Err(SweepError::InvalidMagic);
        }

        let version = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        if version != FORMAT_VERSION {
            return Err(SweepError::UnsupportedVersion(version));
        }

        Ok(Self {
            magic,
            version,
            node_count: read_u64(buf, 8),
            edge_count: read_u64(buf, 16),
            payload_len: read_u64(buf, 24),
        })
    }
}

fn read_u64(buf: &[u8], at: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[at..at + 8]);
    u64::from_le_bytes(bytes)
}
