use bytes::{Buf, Bytes};

/// Cluster header: pts (8B LE) + block count (2B LE) = 10 bytes.
pub const CLUSTER_HEADER_SIZE: usize = 10;

/// Size of one opaque caption block.
pub const BLOCK_SIZE: usize = 3;

/// Largest block count a cluster can declare.
pub const MAX_BLOCKS: usize = u16::MAX as usize;

/// Largest payload a single cluster can carry.
pub const MAX_CLUSTER_PAYLOAD: usize = MAX_BLOCKS * BLOCK_SIZE;

/// One cluster record read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Presentation timestamp in milliseconds.
    pub pts: i64,
    /// Number of 3-byte blocks in the payload.
    pub block_count: u16,
    /// Raw payload, exactly `block_count * 3` bytes.
    pub payload: Bytes,
    /// Input position right after the payload.
    pub end_position: u64,
}

impl Cluster {
    /// True when the cluster carries no blocks.
    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }
}

/// Payload size in bytes declared by a block count.
pub fn payload_size(block_count: u16) -> usize {
    block_count as usize * BLOCK_SIZE
}

/// Decode a cluster header into `(pts, block_count)`.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────┬──────────────────────────┐
/// │ PTS (8B LE)  │ Blocks       │ Payload                  │
/// │ signed, ms   │ (2B LE)      │ (Blocks * 3 bytes)       │
/// └──────────────┴──────────────┴──────────────────────────┘
/// ```
pub fn decode_cluster_header(src: &[u8; CLUSTER_HEADER_SIZE]) -> (i64, u16) {
    let mut buf = &src[..];
    let pts = buf.get_i64_le();
    let block_count = buf.get_u16_le();
    (pts, block_count)
}

#[cfg(test)]
mod tests {
    use bytes::{BufMut, BytesMut};

    use super::*;

    #[test]
    fn decode_header_little_endian() {
        let mut buf = BytesMut::new();
        buf.put_i64_le(1500);
        buf.put_u16_le(2);

        let header: [u8; CLUSTER_HEADER_SIZE] = buf[..].try_into().unwrap();
        assert_eq!(decode_cluster_header(&header), (1500, 2));
    }

    #[test]
    fn decode_negative_pts_and_max_blocks() {
        let mut buf = BytesMut::new();
        buf.put_i64_le(-42);
        buf.put_u16_le(u16::MAX);

        let header: [u8; CLUSTER_HEADER_SIZE] = buf[..].try_into().unwrap();
        assert_eq!(decode_cluster_header(&header), (-42, u16::MAX));
    }

    #[test]
    fn payload_size_fits_without_overflow() {
        assert_eq!(payload_size(0), 0);
        assert_eq!(payload_size(2), 6);
        assert_eq!(payload_size(u16::MAX), MAX_CLUSTER_PAYLOAD);
        assert_eq!(MAX_CLUSTER_PAYLOAD, 196_605);
    }

    #[test]
    fn empty_only_without_blocks() {
        let mut cluster = Cluster {
            pts: 0,
            block_count: 2,
            payload: Bytes::from_static(&[0xFC, 0x94, 0x20, 0xFD, 0x80, 0x80]),
            end_position: 0,
        };
        assert!(!cluster.is_empty());

        cluster.block_count = 0;
        cluster.payload = Bytes::new();
        assert!(cluster.is_empty());
    }
}
