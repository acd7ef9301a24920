//! Static description of the RCWT container.

use std::path::Path;

use rcwt_format::probe;

/// Registration metadata for a container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Short name.
    pub name: &'static str,
    /// Descriptive name.
    pub long_name: &'static str,
    /// Conventional file extensions, without the dot.
    pub extensions: &'static [&'static str],
    /// Timestamps may jump backwards or forwards between packets.
    pub ts_discontinuous: bool,
}

impl FormatInfo {
    /// Score how likely `buf` is the start of this format (0..=100).
    pub fn probe(&self, buf: &[u8]) -> u8 {
        probe(buf)
    }

    /// True when `path` carries one of the conventional extensions.
    pub fn matches_extension(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

pub const RCWT_FORMAT: FormatInfo = FormatInfo {
    name: "rcwt",
    long_name: "RCWT (Raw Captions With Time)",
    extensions: &["bin"],
    ts_discontinuous: true,
};
