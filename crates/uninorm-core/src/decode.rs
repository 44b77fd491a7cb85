//! Strict UTF-8 decoding with source positions
//!
//! Input is always treated as UTF-8. A leading byte-order mark is kept as
//! ordinary text: U+FEFF is stable under every normalization form, so the
//! rewritten file keeps it byte for byte.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::{Error, Result};

/// Location of a byte within the input
///
/// `line` and `column` are 1-based, `column` counting characters.
/// `offset` is the 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// Locate byte `offset` within `text`
    ///
    /// `offset` must lie on a char boundary or at `text.len()`.
    pub fn locate(text: &str, offset: usize) -> Self {
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Position {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{} (byte {})", self.line, self.column, self.offset)
    }
}

/// Decode `bytes` read from `path` as UTF-8
///
/// # Errors
/// Returns `Decode` with the position of the first invalid byte.
pub fn decode<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = e.valid_up_to();
        // Prefix up to `valid` is known good
        let prefix = std::str::from_utf8(&bytes[..valid]).unwrap_or_default();
        let reason = match e.error_len() {
            Some(len) => format!(
                "invalid byte sequence {}",
                hex_bytes(&bytes[valid..valid + len])
            ),
            None => "incomplete sequence at end of input".to_string(),
        };
        Error::Decode {
            path: path.to_path_buf(),
            position: Position::locate(prefix, valid),
            reason,
        }
    })
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
