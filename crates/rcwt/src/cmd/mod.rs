use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod info;
pub mod packets;
pub mod probe;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a file looks like RCWT.
    Probe(ProbeArgs),
    /// Validate a file and print its header and stream summary.
    Info(InfoArgs),
    /// Print the caption packets of a file.
    Packets(PacketsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Probe(args) => probe::run(args, format),
        Command::Info(args) => info::run(args, format),
        Command::Packets(args) => packets::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// File to probe.
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// RCWT file to open.
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct PacketsArgs {
    /// RCWT file to open.
    pub path: PathBuf,
    /// Start at the packet presented at this time (milliseconds).
    #[arg(long, value_name = "MS")]
    pub seek: Option<i64>,
    /// Stop after N packets.
    #[arg(long)]
    pub count: Option<usize>,
    /// Collapse consecutive packets with identical timestamp and payload.
    #[arg(long, env = "RCWT_DROP_DUPLICATES")]
    pub drop_duplicates: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
