/// Errors that can occur while validating or streaming an RCWT input.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Fewer bytes than a full header were available.
    #[error("truncated header ({actual} of {expected} bytes)")]
    Truncated { expected: usize, actual: usize },

    /// The magic bytes are absent.
    #[error("input is not an RCWT file")]
    NotThisFormat,

    /// Recognized format, written by an application this reader does not accept.
    #[error(
        "writing application 0x{writer_id:02X}{reserved:02X} is not supported, \
         only 0xCC00 (ccextractor) or 0xFF00 (rcwt) are compatible"
    )]
    UnsupportedWriter { writer_id: u8, reserved: u8 },

    /// Recognized format with an unknown format version.
    #[error("RCWT version 0x{0:04X} is not compatible (only version 0.001 is known)")]
    UnsupportedVersion(u16),

    /// Written by this system, but by a build with a different writer subversion.
    #[error("input was written by an unsupported rcwt build (subversion 0x{0:02X})")]
    UnsupportedWriterBuild(u8),

    /// A cluster declares more payload than the input supplies.
    #[error("cluster has invalid size (expected={expected} actual={actual} pos={position})")]
    TruncatedCluster {
        expected: usize,
        actual: usize,
        position: u64,
    },

    /// Allocation failed for a cluster buffer or inside the packet sink.
    #[error("out of memory")]
    OutOfMemory,

    /// An I/O error occurred while reading the input.
    #[error("rcwt I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::collections::TryReserveError> for FormatError {
    fn from(_: std::collections::TryReserveError) -> Self {
        FormatError::OutOfMemory
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
