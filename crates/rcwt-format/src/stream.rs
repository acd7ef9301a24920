//! The single elementary stream an RCWT file declares.

/// Kind of elementary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Subtitle,
}

/// Payload encoding of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecId {
    /// EIA-608/CEA-708 closed-caption byte triplets, passed through opaquely.
    Eia608,
}

impl CodecId {
    pub fn name(self) -> &'static str {
        match self {
            CodecId::Eia608 => "eia_608",
        }
    }
}

/// Timestamp unit as a rational number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBase {
    pub num: u32,
    pub den: u32,
}

impl TimeBase {
    /// One tick per millisecond.
    pub const MILLISECONDS: TimeBase = TimeBase { num: 1, den: 1000 };

    /// Clock rate in ticks per second.
    pub fn ticks_per_second(self) -> u32 {
        self.den / self.num
    }
}

/// Description of the stream packets belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub index: usize,
    pub media_type: MediaType,
    pub codec: CodecId,
    pub time_base: TimeBase,
    /// Number of significant bits in timestamps.
    pub pts_wrap_bits: u8,
}

impl StreamDescriptor {
    /// The closed-caption stream every RCWT file carries.
    pub fn closed_captions(index: usize) -> Self {
        Self {
            index,
            media_type: MediaType::Subtitle,
            codec: CodecId::Eia608,
            time_base: TimeBase::MILLISECONDS,
            pts_wrap_bits: 64,
        }
    }
}
