use std::fmt;
use std::io;

use rcwt_demux::DemuxError;
use rcwt_format::FormatError;
use rcwt_queue::QueueError;

// Process exit codes.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const NOT_FOUND: i32 = 2;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound => NOT_FOUND,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::OutOfMemory => INTERNAL,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn format_error(context: &str, err: FormatError) -> CliError {
    match err {
        FormatError::Io(source) => io_error(context, source),
        FormatError::OutOfMemory => CliError::new(INTERNAL, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn queue_error(context: &str, err: QueueError) -> CliError {
    match err {
        QueueError::OutOfRange { .. } | QueueError::IndexOutOfRange { .. } => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

pub fn demux_error(context: &str, err: DemuxError) -> CliError {
    match err {
        DemuxError::Open { source, path } => {
            io_error(&format!("{context} ({})", path.display()), source)
        }
        DemuxError::Format(err) => format_error(context, err),
        DemuxError::Queue(err) => queue_error(context, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_are_data_invalid() {
        let err = format_error("open failed", FormatError::NotThisFormat);
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("open failed: "));

        let err = format_error(
            "open failed",
            FormatError::TruncatedCluster {
                expected: 6,
                actual: 2,
                position: 23,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("pos=23"));
    }

    #[test]
    fn io_errors_map_by_kind() {
        let err = demux_error(
            "open failed",
            DemuxError::Open {
                path: "/missing.bin".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        );
        assert_eq!(err.code, NOT_FOUND);
        assert!(err.message.contains("/missing.bin"));

        let err = format_error(
            "read failed",
            FormatError::Io(io::Error::from(io::ErrorKind::PermissionDenied)),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }

    #[test]
    fn seek_misses_are_usage_errors() {
        let err = queue_error(
            "seek failed",
            QueueError::OutOfRange {
                min_ts: 0,
                ts: 5,
                max_ts: 10,
            },
        );
        assert_eq!(err.code, USAGE);
    }
}
