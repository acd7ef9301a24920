use std::io::Read;

use tracing::{debug, error, trace};

use crate::error::{FormatError, Result};
use crate::reader::ClusterReader;
use crate::sink::PacketSink;

/// Stream every cluster after a validated header into `sink`.
///
/// Empty clusters are skipped and packets are inserted with a zero duration.
/// The loop ends successfully when the input ends at a cluster boundary or
/// inside a trailing cluster header with no blocks; any truncation or
/// allocation failure aborts it.
/// Returns the number of packets emitted. The caller finalizes the sink.
pub fn stream_clusters<R, S>(reader: &mut ClusterReader<R>, sink: &mut S) -> Result<usize>
where
    R: Read,
    S: PacketSink + ?Sized,
{
    let mut emitted = 0usize;
    let mut skipped = 0usize;

    while let Some(cluster) = reader.read_cluster()? {
        if cluster.is_empty() {
            trace!(pts = cluster.pts, "skipping empty cluster");
            skipped += 1;
            continue;
        }

        let size = cluster.payload.len();
        let packet = sink.insert(cluster.payload, Some(0)).map_err(|_| {
            error!(size, "packet sink allocation failed");
            FormatError::OutOfMemory
        })?;
        packet.pts = cluster.pts;
        packet.pos = i64::try_from(cluster.end_position).unwrap_or(i64::MAX);
        trace!(pts = packet.pts, pos = packet.pos, size, "queued cluster");
        emitted += 1;
    }

    debug!(
        packets = emitted,
        empty_clusters = skipped,
        pos = reader.position(),
        "reached end of clusters"
    );
    Ok(emitted)
}
