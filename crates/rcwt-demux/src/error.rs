use std::path::PathBuf;

/// Errors that can occur in demuxer operations.
#[derive(Debug, thiserror::Error)]
pub enum DemuxError {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Header validation or cluster streaming failed.
    #[error("format error: {0}")]
    Format(#[from] rcwt_format::FormatError),

    /// Reading from or seeking in the packet queue failed.
    #[error("queue error: {0}")]
    Queue(#[from] rcwt_queue::QueueError),
}

pub type Result<T> = std::result::Result<T, DemuxError>;
