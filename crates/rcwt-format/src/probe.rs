use std::io::Read;
use std::path::Path;

use crate::header::{HEADER_SIZE, MAGIC};

/// Confidence returned for inputs that start with the RCWT magic.
pub const PROBE_SCORE: u8 = 50;

/// Bytes read from the start of a file when probing it.
pub const PROBE_BUFFER_SIZE: usize = 2048;

/// Estimate whether `buf` is the start of an RCWT file.
///
/// Only the magic is compared; writer and version are left to the full
/// header validation.
pub fn probe(buf: &[u8]) -> u8 {
    if buf.len() > HEADER_SIZE && buf[..MAGIC.len()] == MAGIC {
        PROBE_SCORE
    } else {
        0
    }
}

/// Probe the first bytes of a file.
pub fn probe_file(path: impl AsRef<Path>) -> std::io::Result<u8> {
    let file = std::fs::File::open(path)?;
    let mut buf = Vec::with_capacity(PROBE_BUFFER_SIZE);
    file.take(PROBE_BUFFER_SIZE as u64).read_to_end(&mut buf)?;
    Ok(probe(&buf))
}
