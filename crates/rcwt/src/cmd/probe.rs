use rcwt_demux::RCWT_FORMAT;
use rcwt_format::probe_file;
use serde::Serialize;

use crate::cmd::ProbeArgs;
use crate::exit::{io_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ProbeOutput {
    path: String,
    format: &'static str,
    score: u8,
    extension_match: bool,
}

pub fn run(args: ProbeArgs, format: OutputFormat) -> CliResult<i32> {
    let score = probe_file(&args.path).map_err(|err| io_error("probe failed", err))?;
    tracing::debug!(path = ?args.path, score, "probed file");

    let out = ProbeOutput {
        path: args.path.display().to_string(),
        format: RCWT_FORMAT.name,
        score,
        extension_match: RCWT_FORMAT.matches_extension(&args.path),
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("Probe:");
            println!("  Path:      {}", out.path);
            println!("  Format:    {}", RCWT_FORMAT.long_name);
            println!("  Score:     {}/100", out.score);
            println!(
                "  Extension: {}",
                if out.extension_match { "match" } else { "no match" }
            );
        }
        OutputFormat::Raw => {
            println!("{}", out.score);
        }
    }

    if score > 0 {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}
