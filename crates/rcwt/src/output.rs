use std::fmt::Write as _;
use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rcwt_format::{MediaType, Packet};
use serde::Serialize;

/// Payload bytes shown before a preview is cut short.
const PREVIEW_BYTES: usize = 24;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct PacketOutput {
    index: usize,
    pts: i64,
    duration: Option<i64>,
    pos: i64,
    size: usize,
    blocks: usize,
    payload: String,
}

impl PacketOutput {
    fn new(index: usize, packet: &Packet) -> Self {
        Self {
            index,
            pts: packet.pts,
            duration: packet.duration,
            pos: packet.pos,
            size: packet.size(),
            blocks: packet.size() / rcwt_format::BLOCK_SIZE,
            payload: hex_preview(packet.payload.as_ref(), usize::MAX),
        }
    }
}

/// Print packets, each paired with its index in the queue.
pub fn print_packets<'a>(
    packets: impl IntoIterator<Item = (usize, &'a Packet)>,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            for (index, packet) in packets {
                println!(
                    "{}",
                    serde_json::to_string(&PacketOutput::new(index, packet))
                        .unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "PTS", "TIME", "DURATION", "POS", "SIZE", "PAYLOAD"]);
            for (index, packet) in packets {
                table.add_row(vec![
                    index.to_string(),
                    packet.pts.to_string(),
                    format_timestamp(packet.pts),
                    packet
                        .duration
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    packet.pos.to_string(),
                    packet.size().to_string(),
                    hex_preview(packet.payload.as_ref(), PREVIEW_BYTES),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, packet) in packets {
                println!(
                    "#{index} pts={} ({}) pos={} size={} payload={}",
                    packet.pts,
                    format_timestamp(packet.pts),
                    packet.pos,
                    packet.size(),
                    hex_preview(packet.payload.as_ref(), PREVIEW_BYTES)
                );
            }
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout().lock();
            for (_, packet) in packets {
                let _ = out.write_all(packet.payload.as_ref());
            }
            let _ = out.flush();
        }
    }
}

pub fn media_type_name(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Subtitle => "subtitle",
    }
}

/// Render a millisecond timestamp as `HH:MM:SS.mmm`.
pub fn format_timestamp(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let (hours, rest) = (ms / 3_600_000, ms % 3_600_000);
    let (minutes, rest) = (rest / 60_000, rest % 60_000);
    let (seconds, millis) = (rest / 1000, rest % 1000);
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Space-separated hex, one group per 3-byte block, cut after `limit` bytes.
pub fn hex_preview(payload: &[u8], limit: usize) -> String {
    let mut out = String::with_capacity(payload.len().min(limit) * 2 + 4);
    for (i, byte) in payload.iter().take(limit).enumerate() {
        if i > 0 && i % rcwt_format::BLOCK_SIZE == 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    if payload.len() > limit {
        out.push_str(" ...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_as_clock() {
        assert_eq!(format_timestamp(0), "00:00:00.000");
        assert_eq!(format_timestamp(1500), "00:00:01.500");
        assert_eq!(format_timestamp(3_723_004), "01:02:03.004");
        assert_eq!(format_timestamp(-250), "-00:00:00.250");
    }

    #[test]
    fn hex_groups_blocks() {
        assert_eq!(hex_preview(&[0xFC, 0x94, 0x20, 0xFD, 0x80, 0x80], 64), "fc9420 fd8080");
        assert_eq!(hex_preview(&[1, 2, 3, 4, 5, 6], 3), "010203 ...");
        assert_eq!(hex_preview(&[], 3), "");
    }
}
