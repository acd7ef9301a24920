//! High-level RCWT demuxer.
//!
//! This is the "just works" layer. Open a file or any reader, and the header
//! is validated, every cluster is queued and indexed, and packets can then be
//! read in order or after a timestamp seek.

pub mod demuxer;
pub mod error;
pub mod format;

pub use demuxer::{DemuxConfig, Demuxer};
pub use error::{DemuxError, Result};
pub use format::{FormatInfo, RCWT_FORMAT};
pub use rcwt_queue::SeekTarget;
