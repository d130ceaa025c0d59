use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CinetrendError, CinetrendResult};

/// Candidate text encoding for input tables.
///
/// `Iso8859_1` and `Latin1` are the same codec under two names; both are kept so a priority list
/// written against either name round-trips through config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8", alias = "utf8", alias = "UTF-8")]
    Utf8,
    #[serde(rename = "ISO-8859-1", alias = "iso-8859-1")]
    Iso8859_1,
    #[serde(rename = "latin1", alias = "latin-1")]
    Latin1,
    #[serde(rename = "cp1252", alias = "windows-1252")]
    Cp1252,
}

/// Priority order used by the yearbook report.
pub const DEFAULT_ENCODINGS: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Iso8859_1,
    TextEncoding::Latin1,
    TextEncoding::Cp1252,
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// Positions cp1252 leaves unassigned; strict decoders reject them.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

impl TextEncoding {
    /// Canonical name, as written in config files and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::Latin1 => "latin1",
            Self::Cp1252 => "cp1252",
        }
    }

    /// Strictly decode `bytes`, returning `None` on the first malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                encoding_rs::UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|s| s.into_owned())
            }
            // Every byte is a valid code point; this never fails.
            Self::Iso8859_1 | Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Cp1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                encoding_rs::WINDOWS_1252
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|s| s.into_owned())
            }
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode `bytes` with the first candidate that accepts them.
///
/// `path` is only used to name the file in the error.
pub fn decode_with_fallback(
    path: &Path,
    bytes: &[u8],
    candidates: &[TextEncoding],
) -> CinetrendResult<(String, TextEncoding)> {
    for &enc in candidates {
        if let Some(text) = enc.decode(bytes) {
            return Ok((text, enc));
        }
        tracing::trace!(file = %path.display(), encoding = enc.name(), "decode rejected");
    }
    Err(CinetrendError::Decode {
        path: path.to_path_buf(),
        tried: candidates.iter().map(|e| e.name().to_string()).collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/data/encoding.rs"]
mod tests;
