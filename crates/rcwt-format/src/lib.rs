//! Header validation and cluster streaming for RCWT (Raw Captions With Time).
//!
//! RCWT is the native archival format of ccextractor. A file is an 11-byte
//! header followed by clusters, each made of:
//! - an 8-byte little-endian presentation timestamp (milliseconds)
//! - a 2-byte little-endian block count
//! - `block_count` opaque 3-byte caption blocks
//!
//! There is no footer and no end marker: the file ends at a cluster boundary.

pub mod cluster;
pub mod error;
pub mod header;
pub mod probe;
pub mod reader;
pub mod sink;
pub mod stream;
pub mod streamer;

pub use cluster::{
    decode_cluster_header, payload_size, Cluster, BLOCK_SIZE, CLUSTER_HEADER_SIZE, MAX_BLOCKS,
    MAX_CLUSTER_PAYLOAD,
};
pub use error::{FormatError, Result};
pub use header::{
    parse_header, validate_header, HeaderInfo, WriterKind, FORMAT_VERSION, HEADER_SIZE, MAGIC,
    SELF_WRITER_SUBVERSION,
};
pub use probe::{probe, probe_file, PROBE_BUFFER_SIZE, PROBE_SCORE};
pub use reader::{ClusterReader, ReaderConfig};
pub use sink::{Packet, PacketSink};
pub use stream::{CodecId, MediaType, StreamDescriptor, TimeBase};
pub use streamer::stream_clusters;
