use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::{error, warn};

use crate::cluster::{decode_cluster_header, payload_size, Cluster, CLUSTER_HEADER_SIZE};
use crate::error::{FormatError, Result};
use crate::header::{parse_header, validate_header, HeaderInfo, HEADER_SIZE};

/// Configuration for the cluster reader.
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Position of the first header byte within the underlying input.
    ///
    /// Packet positions are reported relative to the start of the input, so
    /// set this when the reader is handed an input that was already advanced.
    pub start_position: u64,
}

/// Reads the RCWT header and cluster records from any `Read` input.
///
/// Handles partial reads internally and tracks the input position itself,
/// so the input does not need to be seekable.
pub struct ClusterReader<T> {
    inner: T,
    position: u64,
}

impl<T: Read> ClusterReader<T> {
    /// Create a new cluster reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    /// Create a new cluster reader with explicit configuration.
    pub fn with_config(inner: T, config: ReaderConfig) -> Self {
        Self {
            inner,
            position: config.start_position,
        }
    }

    /// Consume exactly [`HEADER_SIZE`] bytes and validate them.
    pub fn read_header(&mut self) -> Result<HeaderInfo> {
        let mut header = [0u8; HEADER_SIZE];
        let read = self.read_full(&mut header)?;
        if read < HEADER_SIZE {
            validate_header(&header[..read])?;
        }
        parse_header(&header)
    }

    /// Read the next cluster record (blocking).
    ///
    /// Returns `Ok(None)` when the input ends at a cluster boundary.
    /// Clusters with a zero block count are returned with an empty payload
    /// and no allocation.
    ///
    /// Bytes missing from a trailing cluster header read as zero. A tail whose
    /// block count is still zero ends the input; a tail that reaches a nonzero
    /// block count fails as a truncated cluster.
    pub fn read_cluster(&mut self) -> Result<Option<Cluster>> {
        let mut header = [0u8; CLUSTER_HEADER_SIZE];
        let read = self.read_full(&mut header)?;
        if read == 0 {
            return Ok(None);
        }

        let (pts, block_count) = decode_cluster_header(&header);
        if read < CLUSTER_HEADER_SIZE {
            if block_count == 0 {
                warn!(
                    actual = read,
                    pos = self.position,
                    "ignoring partial cluster header at end of input"
                );
                return Ok(None);
            }
            let expected = payload_size(block_count);
            error!(
                expected,
                actual = 0,
                pos = self.position,
                "input cluster has invalid size"
            );
            return Err(FormatError::TruncatedCluster {
                expected,
                actual: 0,
                position: self.position,
            });
        }

        if block_count == 0 {
            return Ok(Some(Cluster {
                pts,
                block_count,
                payload: Bytes::new(),
                end_position: self.position,
            }));
        }

        let expected = payload_size(block_count);
        let mut payload = Vec::new();
        payload.try_reserve_exact(expected)?;
        payload.resize(expected, 0);

        let actual = self.read_full(&mut payload)?;
        if actual != expected {
            error!(
                expected,
                actual,
                pos = self.position,
                "input cluster has invalid size"
            );
            return Err(FormatError::TruncatedCluster {
                expected,
                actual,
                position: self.position,
            });
        }

        Ok(Some(Cluster {
            pts,
            block_count,
            payload: Bytes::from(payload),
            end_position: self.position,
        }))
    }

    /// Current input position (bytes consumed plus the configured start).
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Borrow the underlying input.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying input.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner input.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Fill `buf` until it is full or the input ends; returns the bytes read.
    fn read_full(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.position += n as u64;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FormatError::Io(err)),
            }
        }
        Ok(filled)
    }
}
