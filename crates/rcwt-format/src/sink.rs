use std::collections::TryReserveError;

use bytes::Bytes;

use crate::stream::StreamDescriptor;

/// A timestamped chunk of opaque caption data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Raw cluster payload.
    pub payload: Bytes,
    /// Presentation timestamp in stream time base units.
    pub pts: i64,
    /// Input position right after the cluster payload, or -1 when unknown.
    pub pos: i64,
    /// Display duration, if known.
    pub duration: Option<i64>,
    /// Index of the stream the packet belongs to.
    pub stream_index: usize,
}

impl Packet {
    /// Create a packet with unset timing.
    pub fn new(payload: impl Into<Bytes>, duration: Option<i64>) -> Self {
        Self {
            payload: payload.into(),
            pts: 0,
            pos: -1,
            duration,
            stream_index: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

/// Ordered packet store fed by the cluster streamer.
///
/// Packets arrive in non-decreasing input order. The caller fills in `pts`
/// and `pos` on the handle returned by [`PacketSink::insert`].
pub trait PacketSink {
    /// Take ownership of `payload` and append it as a new packet.
    fn insert(
        &mut self,
        payload: Bytes,
        duration: Option<i64>,
    ) -> std::result::Result<&mut Packet, TryReserveError>;

    /// Called exactly once after the last insert.
    fn finalize(&mut self, stream: &StreamDescriptor);
}

impl PacketSink for Vec<Packet> {
    fn insert(
        &mut self,
        payload: Bytes,
        duration: Option<i64>,
    ) -> std::result::Result<&mut Packet, TryReserveError> {
        self.try_reserve(1)?;
        self.push(Packet::new(payload, duration));
        let last = self.len() - 1;
        Ok(&mut self[last])
    }

    fn finalize(&mut self, stream: &StreamDescriptor) {
        for packet in self.iter_mut() {
            packet.stream_index = stream.index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_appends_in_order() {
        let mut sink: Vec<Packet> = Vec::new();
        PacketSink::insert(&mut sink, Bytes::from_static(b"abc"), None).unwrap().pts = 10;
        PacketSink::insert(&mut sink, Bytes::from_static(b"def"), Some(0)).unwrap().pts = 20;
        sink.finalize(&StreamDescriptor::closed_captions(3));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].pts, 10);
        assert_eq!(sink[0].duration, None);
        assert_eq!(sink[1].payload.as_ref(), b"def");
        assert_eq!(sink[1].duration, Some(0));
        assert!(sink.iter().all(|p| p.stream_index == 3));
    }

    #[test]
    fn new_packet_has_unknown_position() {
        let packet = Packet::new(vec![1u8, 2, 3], None);
        assert_eq!(packet.pos, -1);
        assert_eq!(packet.size(), 3);
    }
}
