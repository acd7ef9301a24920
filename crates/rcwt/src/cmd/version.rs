use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("rcwt {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: rcwt");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("RCWT_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!(
        "format: {} version 0x{:04x}",
        rcwt_demux::RCWT_FORMAT.name,
        rcwt_format::FORMAT_VERSION
    );
    println!(
        "writer_subversion: 0x{:02x}",
        rcwt_format::SELF_WRITER_SUBVERSION
    );

    Ok(SUCCESS)
}
