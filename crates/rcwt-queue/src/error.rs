/// Errors that can occur when reading from or seeking in a packet queue.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// The queue was read or seeked before it was finalized.
    #[error("packet queue is not finalized")]
    NotFinalized,

    /// No packet satisfies the requested timestamp window.
    #[error("no packet within [{min_ts}, {max_ts}] for timestamp {ts}")]
    OutOfRange { min_ts: i64, ts: i64, max_ts: i64 },

    /// A packet index past the end of the queue was requested.
    #[error("packet index {index} out of range ({len} packets)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The requested seek mode is not available.
    #[error("unsupported seek: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, QueueError>;
