use rcwt_demux::{Demuxer, RCWT_FORMAT};
use serde::Serialize;

use crate::cmd::InfoArgs;
use crate::exit::{demux_error, CliResult, SUCCESS};
use crate::output::{format_timestamp, media_type_name, OutputFormat};

#[derive(Serialize)]
struct StreamInfo {
    index: usize,
    media_type: &'static str,
    codec: &'static str,
    time_base: String,
    clock_hz: u32,
}

#[derive(Serialize)]
struct InfoOutput {
    path: String,
    format: &'static str,
    writer: &'static str,
    writer_id: u8,
    writer_subversion: u8,
    format_version: u16,
    stream: StreamInfo,
    packets: usize,
    payload_bytes: usize,
    first_pts: Option<i64>,
    last_pts: Option<i64>,
}

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let demuxer = Demuxer::open(&args.path).map_err(|err| demux_error("open failed", err))?;
    let header = demuxer.header();
    let stream = demuxer.stream();
    let packets = demuxer.packets();

    let out = InfoOutput {
        path: args.path.display().to_string(),
        format: RCWT_FORMAT.name,
        writer: header.writer.name(),
        writer_id: header.writer.id(),
        writer_subversion: header.writer_subversion,
        format_version: header.format_version,
        stream: StreamInfo {
            index: stream.index,
            media_type: media_type_name(stream.media_type),
            codec: stream.codec.name(),
            time_base: format!("{}/{}", stream.time_base.num, stream.time_base.den),
            clock_hz: stream.time_base.ticks_per_second(),
        },
        packets: packets.len(),
        payload_bytes: packets.iter().map(|p| p.size()).sum(),
        first_pts: packets.first().map(|p| p.pts),
        last_pts: packets.last().map(|p| p.pts),
    };

    print_info(&out, format);
    Ok(SUCCESS)
}

fn print_info(out: &InfoOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("RCWT Info:");
            println!("  Path:       {}", out.path);
            println!(
                "  Writer:     {} (0x{:02X}, subversion 0x{:02X})",
                out.writer, out.writer_id, out.writer_subversion
            );
            println!("  Version:    0x{:04X}", out.format_version);
            println!(
                "  Stream #{}:  {} ({}), time base {} ({} Hz)",
                out.stream.index,
                out.stream.media_type,
                out.stream.codec,
                out.stream.time_base,
                out.stream.clock_hz
            );
            println!(
                "  Packets:    {} ({} bytes)",
                out.packets, out.payload_bytes
            );
            match (out.first_pts, out.last_pts) {
                (Some(first), Some(last)) => println!(
                    "  Span:       {} - {}",
                    format_timestamp(first),
                    format_timestamp(last)
                ),
                _ => println!("  Span:       empty"),
            }
        }
        OutputFormat::Raw => {
            println!("{}", out.packets);
        }
    }
}
