//! Ordered, seekable packet queue.
//!
//! Packets are appended while a file is read, sorted and indexed once by
//! [`PacketQueue::finalize`](rcwt_format::PacketSink::finalize), then served
//! sequentially or after a timestamp seek.

pub mod config;
pub mod error;
pub mod queue;

pub use config::{QueueConfig, SortOrder};
pub use error::{QueueError, Result};
pub use queue::{PacketQueue, SeekTarget};
