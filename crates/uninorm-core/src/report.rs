//! Run report: what a single normalization pass observed and did

use std::path::PathBuf;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::decode::Position;
use crate::form::NormalizationForm;

/// Outcome of one `Normalizer::run`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: PathBuf,
    /// Destination, absent in check-only mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub form: NormalizationForm,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// Normalized bytes differ from the input bytes
    pub changed: bool,
    /// The destination file was (re)written
    pub written: bool,
    /// First character that normalization changed
    pub first_difference: Option<Position>,
    pub sha256_before: String,
    pub sha256_after: String,
}

impl Report {
    /// One-line human summary
    pub fn summary(&self) -> String {
        let input = self.input.display();
        match (&self.output, self.changed) {
            (None, false) => format!("{} is already {}", input, self.form),
            (None, true) => match self.first_difference {
                Some(pos) => format!("{} is not {} (first change at {})", input, self.form, pos),
                None => format!("{} is not {}", input, self.form),
            },
            (Some(out), _) if !self.written => {
                format!("{} is already {}; {} left untouched", input, self.form, out.display())
            }
            (Some(out), _) => format!(
                "normalized {} to {} using {} ({} -> {} bytes)",
                input,
                out.display(),
                self.form,
                self.bytes_in,
                self.bytes_out
            ),
        }
    }
}

/// Lower-case hex SHA-256 of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
