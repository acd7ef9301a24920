use bytes::Buf;
use tracing::error;

use crate::error::{FormatError, Result};

/// File header: magic (3) + writer (2) + writer subversion (1) + version (2) + unused (3).
pub const HEADER_SIZE: usize = 11;

/// Magic bytes: 0xCCCC 0xED.
pub const MAGIC: [u8; 3] = [0xCC, 0xCC, 0xED];

/// The only known format version (0.001).
pub const FORMAT_VERSION: u16 = 0x0001;

/// Writer subversion stamped by the rcwt writer build this reader accepts.
pub const SELF_WRITER_SUBVERSION: u8 = 0x60;

const WRITER_CCEXTRACTOR: u8 = 0xCC;
const WRITER_SELF: u8 = 0xFF;

/// The application that produced an RCWT file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterKind {
    /// ccextractor (writer id 0xCC).
    CcExtractor,
    /// rcwt itself (writer id 0xFF).
    SelfWriter,
}

impl WriterKind {
    /// Writer id byte as stored at header offset 3.
    pub fn id(self) -> u8 {
        match self {
            WriterKind::CcExtractor => WRITER_CCEXTRACTOR,
            WriterKind::SelfWriter => WRITER_SELF,
        }
    }

    /// Human-readable writer name.
    pub fn name(self) -> &'static str {
        match self {
            WriterKind::CcExtractor => "ccextractor",
            WriterKind::SelfWriter => "rcwt",
        }
    }
}

/// Informational summary of an accepted header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub writer: WriterKind,
    pub writer_subversion: u8,
    pub format_version: u16,
}

/// Validate the first bytes of an input and report which application wrote it.
///
/// Checks run in order and stop at the first failure:
/// 1. magic `CC CC ED`
/// 2. writer id `0xCC` or `0xFF`, followed by a zero byte
/// 3. format version `0x0001`
/// 4. writer subversion `0x60` when the writer id is `0xFF`
///
/// Bytes 8..11 are not inspected.
pub fn validate_header(bytes: &[u8]) -> Result<WriterKind> {
    if bytes.len() < HEADER_SIZE {
        error!(len = bytes.len(), "input is not an RCWT file (short header)");
        return Err(FormatError::Truncated {
            expected: HEADER_SIZE,
            actual: bytes.len(),
        });
    }

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&bytes[..HEADER_SIZE]);
    parse_header(&header).map(|info| info.writer)
}

/// Validate a complete header and return its informational fields.
pub fn parse_header(header: &[u8; HEADER_SIZE]) -> Result<HeaderInfo> {
    let mut buf = &header[..];
    let magic16 = buf.get_u16();
    let magic8 = buf.get_u8();
    let writer_id = buf.get_u8();
    let reserved = buf.get_u8();
    let writer_subversion = buf.get_u8();
    let format_version = buf.get_u16();

    if magic16 != 0xCCCC || magic8 != 0xED {
        error!("input is not an RCWT file");
        return Err(FormatError::NotThisFormat);
    }

    let writer = match (writer_id, reserved) {
        (WRITER_CCEXTRACTOR, 0x00) => WriterKind::CcExtractor,
        (WRITER_SELF, 0x00) => WriterKind::SelfWriter,
        _ => {
            error!(writer_id, reserved, "input writing application is not supported");
            return Err(FormatError::UnsupportedWriter {
                writer_id,
                reserved,
            });
        }
    };

    if format_version != FORMAT_VERSION {
        error!(format_version, "input RCWT version is not compatible");
        return Err(FormatError::UnsupportedVersion(format_version));
    }

    if writer == WriterKind::SelfWriter && writer_subversion != SELF_WRITER_SUBVERSION {
        error!(
            writer_subversion,
            "input was written by a different rcwt build and is unsupported"
        );
        return Err(FormatError::UnsupportedWriterBuild(writer_subversion));
    }

    Ok(HeaderInfo {
        writer,
        writer_subversion,
        format_version,
    })
}
