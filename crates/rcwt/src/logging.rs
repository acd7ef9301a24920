use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Environment variable holding extra filter directives (e.g. `rcwt_queue=trace`).
pub const LOG_ENV: &str = "RCWT_LOG";

const CRATE_TARGETS: [&str; 4] = ["rcwt", "rcwt_format", "rcwt_queue", "rcwt_demux"];

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Filter applying `level` to this workspace's crates and `warn` to everything else.
///
/// Directives from `extra` are appended and win over the defaults.
fn build_filter(level: LogLevel, extra: Option<&str>) -> EnvFilter {
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.as_str())),
    );
    if let Some(extra) = extra.filter(|s| !s.trim().is_empty()) {
        directives.push(extra.trim().to_string());
    }
    EnvFilter::new(directives.join(","))
}

pub fn init_logging(format: LogFormat, level: LogLevel) {
    let extra = std::env::var(LOG_ENV).ok();
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(level, extra.as_deref()))
        .with_ansi(false)
        .with_target(true);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
