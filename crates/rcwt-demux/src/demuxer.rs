use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rcwt_format::{
    stream_clusters, ClusterReader, HeaderInfo, Packet, PacketSink, ReaderConfig,
    StreamDescriptor,
};
use rcwt_queue::{PacketQueue, QueueConfig, SeekTarget};
use tracing::{debug, info};

use crate::error::{DemuxError, Result};

/// Configuration for opening an RCWT input.
#[derive(Debug, Clone)]
pub struct DemuxConfig {
    /// Keep consecutive packets with identical timestamp and payload.
    /// Caption control codes are routinely repeated, so this defaults to true.
    pub keep_duplicates: bool,
    /// Cluster reader settings.
    pub reader: ReaderConfig,
}

impl Default for DemuxConfig {
    fn default() -> Self {
        Self {
            keep_duplicates: true,
            reader: ReaderConfig::default(),
        }
    }
}

/// An opened RCWT input with every packet queued and indexed.
#[derive(Debug)]
pub struct Demuxer {
    header: HeaderInfo,
    stream: StreamDescriptor,
    queue: PacketQueue,
}

impl Demuxer {
    /// Open and fully index the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, DemuxConfig::default())
    }

    /// Open with explicit configuration.
    pub fn open_with_config(path: impl AsRef<Path>, config: DemuxConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DemuxError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, "opened rcwt file");
        Self::from_reader(BufReader::new(file), config)
    }

    /// Validate the header and queue every cluster of `input`.
    ///
    /// Any error aborts the open; no partially read input is ever returned.
    pub fn from_reader<R: Read>(input: R, config: DemuxConfig) -> Result<Self> {
        let mut reader = ClusterReader::with_config(input, config.reader);
        let header = reader.read_header()?;

        let stream = StreamDescriptor::closed_captions(0);
        let mut queue = PacketQueue::with_config(QueueConfig {
            keep_duplicates: config.keep_duplicates,
            ..QueueConfig::default()
        });

        let emitted = stream_clusters(&mut reader, &mut queue)?;
        queue.finalize(&stream);

        info!(
            writer = header.writer.name(),
            packets = emitted,
            "indexed rcwt input"
        );

        Ok(Self {
            header,
            stream,
            queue,
        })
    }

    /// The validated header.
    pub fn header(&self) -> &HeaderInfo {
        &self.header
    }

    /// The single closed-caption stream.
    pub fn stream(&self) -> &StreamDescriptor {
        &self.stream
    }

    /// Number of queued packets.
    pub fn packet_count(&self) -> usize {
        self.queue.len()
    }

    /// All queued packets in presentation order.
    pub fn packets(&self) -> &[Packet] {
        self.queue.packets()
    }

    /// Index of the packet the next [`Demuxer::read_packet`] returns.
    pub fn cursor(&self) -> usize {
        self.queue.cursor()
    }

    /// Read the next packet, or `None` at the end of the input.
    pub fn read_packet(&mut self) -> Result<Option<Packet>> {
        Ok(self.queue.read_packet()?)
    }

    /// Reposition the read cursor within the stream.
    pub fn seek(&mut self, target: SeekTarget) -> Result<()> {
        self.queue.seek(Some(self.stream.index), target)?;
        Ok(())
    }

    /// Release every queued packet.
    pub fn close(mut self) {
        self.queue.close();
    }
}
