//! LZ4 payload compression/decompression.

use crate::types::error::{SweepError, SweepResult};

/// Compress an edge payload with LZ4 (prepend size for decompression).
pub fn compress_payload(bytes: &[u8]) -> Vec<u8> {
    lz4_flex::compress_prepend_size(bytes)
}

/// Decompress an LZ4-compressed edge payload.
pub fn decompress_payload(data: &[u8]) -> SweepResult<Vec<u8>> {
    lz4_flex::decompress_size_prepended(data).map_err(|e| SweepError::Compression(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_rejected() {
        let err = decompress_payload(&[10, 0, 0, 0, 0xF0]).unwrap_err();
        assert!(matches!(err, SweepError::Compression(_)));
    }

    #[test]
    fn test_repetitive_payload_shrinks() {
        let raw = vec![7u8; 4096];
        let packed = compress_payload(&raw);
        assert!(packed.len() < raw.len());
        assert_eq!(decompress_payload(&packed).unwrap(), raw);
    }
}
