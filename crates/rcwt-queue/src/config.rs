/// Sort key applied when the queue is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Timestamp first, input position as tie-breaker.
    #[default]
    TsPos,
    /// Input position first, timestamp as tie-breaker.
    PosTs,
}

/// Controls packet queue finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    /// Sort key applied on finalize.
    pub sort: SortOrder,
    /// When false, consecutive packets with identical pts, duration, stream
    /// and payload are collapsed into one on finalize.
    pub keep_duplicates: bool,
}
