use rcwt_demux::{DemuxConfig, Demuxer, SeekTarget};

use crate::cmd::PacketsArgs;
use crate::exit::{demux_error, CliResult, SUCCESS};
use crate::output::{print_packets, OutputFormat};

pub fn run(args: PacketsArgs, format: OutputFormat) -> CliResult<i32> {
    let config = DemuxConfig {
        keep_duplicates: !args.drop_duplicates,
        ..DemuxConfig::default()
    };
    let mut demuxer = Demuxer::open_with_config(&args.path, config)
        .map_err(|err| demux_error("open failed", err))?;

    if let Some(ts) = args.seek {
        demuxer
            .seek(SeekTarget::timestamp(ts))
            .map_err(|err| demux_error("seek failed", err))?;
    }

    let limit = args.count.unwrap_or(usize::MAX);
    let start = demuxer.cursor();
    let mut selected = Vec::new();
    while selected.len() < limit {
        let Some(packet) = demuxer
            .read_packet()
            .map_err(|err| demux_error("read failed", err))?
        else {
            break;
        };
        selected.push(packet);
    }
    tracing::debug!(start, printed = selected.len(), "read packets");

    print_packets(
        selected
            .iter()
            .enumerate()
            .map(|(n, packet)| (start + n, packet)),
        format,
    );
    Ok(SUCCESS)
}
