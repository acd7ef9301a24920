//! Reader for RCWT (Raw Captions With Time) closed-caption archives.
//!
//! RCWT is the native archival format of ccextractor: raw 608/708 caption
//! bitstreams with a timestamp per cluster. This crate validates the header,
//! streams clusters into an ordered packet queue and serves them back.
//!
//! # Crate Structure
//!
//! - [`format`] — Header validation, probing and cluster streaming
//! - [`queue`] — Ordered, seekable packet queue
//! - [`demux`] — High-level demuxer tying both together

/// Re-export format types.
pub mod format {
    pub use rcwt_format::*;
}

/// Re-export queue types.
pub mod queue {
    pub use rcwt_queue::*;
}

/// Re-export demuxer types.
pub mod demux {
    pub use rcwt_demux::*;
}
