use std::collections::TryReserveError;

use bytes::Bytes;
use rcwt_format::{Packet, PacketSink, StreamDescriptor};
use tracing::{debug, warn};

use crate::config::{QueueConfig, SortOrder};
use crate::error::{QueueError, Result};

/// Where to position the read cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekTarget {
    /// Closest packet at or before `ts`, constrained to `[min_ts, max_ts]`.
    Timestamp { min_ts: i64, ts: i64, max_ts: i64 },
    /// Packet number in queue order.
    Index(usize),
    /// Byte offset in the input. Not supported.
    Byte(u64),
}

impl SeekTarget {
    /// Seek to `ts` with no lower or upper bound.
    pub fn timestamp(ts: i64) -> Self {
        SeekTarget::Timestamp {
            min_ts: i64::MIN,
            ts,
            max_ts: i64::MAX,
        }
    }
}

/// Ordered store of packets with sequential read and timestamp seek.
#[derive(Debug, Default)]
pub struct PacketQueue {
    packets: Vec<Packet>,
    cursor: usize,
    finalized: bool,
    config: QueueConfig,
}

impl PacketQueue {
    /// Create an empty queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Create an empty queue with explicit configuration.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            packets: Vec::new(),
            cursor: 0,
            finalized: false,
            config,
        }
    }

    /// Return the packet under the cursor and advance it.
    ///
    /// Returns `Ok(None)` once every packet has been read.
    pub fn read_packet(&mut self) -> Result<Option<Packet>> {
        self.ensure_finalized()?;
        let Some(packet) = self.packets.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        Ok(Some(packet.clone()))
    }

    /// Position the cursor on `target`.
    ///
    /// `stream_index` restricts timestamp seeks to one stream; `None` accepts
    /// packets of any stream.
    pub fn seek(&mut self, stream_index: Option<usize>, target: SeekTarget) -> Result<()> {
        self.ensure_finalized()?;
        match target {
            SeekTarget::Timestamp { min_ts, ts, max_ts } => {
                self.seek_timestamp(stream_index, min_ts, ts, max_ts)
            }
            SeekTarget::Index(index) => self.seek_index(index),
            SeekTarget::Byte(_) => Err(QueueError::Unsupported("byte offsets")),
        }
    }

    fn seek_index(&mut self, index: usize) -> Result<()> {
        if index >= self.packets.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.packets.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    fn seek_timestamp(
        &mut self,
        stream_index: Option<usize>,
        min_ts: i64,
        ts: i64,
        max_ts: i64,
    ) -> Result<()> {
        let out_of_range = QueueError::OutOfRange { min_ts, ts, max_ts };
        if self.packets.is_empty() {
            return Err(out_of_range);
        }

        let packets = &self.packets;
        let wanted = |p: &Packet| stream_index.is_none_or(|s| p.stream_index == s);

        // Last packet at or before ts, or the first packet.
        let mut idx = packets.partition_point(|p| p.pts <= ts).saturating_sub(1);

        if packets[idx].pts < min_ts {
            if let Some(i) =
                (idx..packets.len()).find(|&i| packets[i].pts >= min_ts && wanted(&packets[i]))
            {
                idx = i;
            }
        }
        if packets[idx].pts > max_ts {
            if let Some(i) = (0..idx)
                .rev()
                .find(|&i| packets[i].pts <= max_ts && wanted(&packets[i]))
            {
                idx = i;
            }
        }

        let selected = packets[idx].pts;
        if selected < min_ts || selected > max_ts {
            return Err(out_of_range);
        }

        // Earlier packets still on screen at the selected timestamp.
        for i in (0..idx).rev() {
            let packet = &packets[i];
            let Some(duration) = packet.duration.filter(|d| *d > 0) else {
                continue;
            };
            if !wanted(packet) {
                continue;
            }
            if packet.pts >= min_ts && packet.pts > selected.saturating_sub(duration) {
                idx = i;
            } else {
                break;
            }
        }

        if stream_index.is_none() {
            while idx > 0 && packets[idx - 1].pts == packets[idx].pts {
                idx -= 1;
            }
        }

        debug!(ts, selected, index = idx, "seeked packet queue");
        self.cursor = idx;
        Ok(())
    }

    /// Drop every packet and return to the unfinalized state.
    pub fn close(&mut self) {
        self.packets = Vec::new();
        self.cursor = 0;
        self.finalized = false;
    }

    /// Number of packets held.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// All packets in queue order.
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    /// Index of the next packet [`PacketQueue::read_packet`] returns.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Current queue configuration.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    fn ensure_finalized(&self) -> Result<()> {
        if self.finalized {
            Ok(())
        } else {
            Err(QueueError::NotFinalized)
        }
    }

    fn fill_durations(&mut self) {
        for i in 1..self.packets.len() {
            let (head, tail) = self.packets.split_at_mut(i);
            let current = &mut head[i - 1];
            if current.duration.is_some() {
                continue;
            }
            current.duration = tail[0]
                .pts
                .checked_sub(current.pts)
                .filter(|d| *d >= 0);
        }
    }

    fn drop_duplicates(&mut self) {
        let before = self.packets.len();
        self.packets.dedup_by(|next, last| {
            next.pts == last.pts
                && next.duration == last.duration
                && next.stream_index == last.stream_index
                && next.payload == last.payload
        });
        let dropped = before - self.packets.len();
        if dropped > 0 {
            warn!(dropped, "dropping duplicated subtitle events");
        }
    }
}

impl PacketSink for PacketQueue {
    fn insert(
        &mut self,
        payload: Bytes,
        duration: Option<i64>,
    ) -> std::result::Result<&mut Packet, TryReserveError> {
        self.packets.try_reserve(1)?;
        self.packets.push(Packet::new(payload, duration));
        let last = self.packets.len() - 1;
        Ok(&mut self.packets[last])
    }

    fn finalize(&mut self, stream: &StreamDescriptor) {
        for packet in &mut self.packets {
            packet.stream_index = stream.index;
        }

        match self.config.sort {
            SortOrder::TsPos => self.packets.sort_by_key(|p| (p.pts, p.pos)),
            SortOrder::PosTs => self.packets.sort_by_key(|p| (p.pos, p.pts)),
        }

        self.fill_durations();
        if !self.config.keep_duplicates {
            self.drop_duplicates();
        }

        self.cursor = 0;
        self.finalized = true;
        debug!(
            packets = self.packets.len(),
            stream = stream.index,
            "finalized packet queue"
        );
    }
}
