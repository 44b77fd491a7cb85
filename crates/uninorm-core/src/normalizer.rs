//! Normalizer — rewrites a text file in a chosen Unicode normalization form
//!
//! The transform itself is delegated to `unicode-normalization`; this module
//! owns the single linear pass around it.
//!
//! # Pipeline
//!
//! `read → decode (UTF-8) → normalize → write → report`
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x, f), f) == normalize(x, f)`
//! - **Fixed point**: the output of form `f` satisfies `is_normalized(_, f)`
//! - **No partial writes**: the output is only touched after the input has
//!   been read and decoded, and is replaced atomically

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

use crate::decode::{self, Position};
use crate::file;
use crate::form::NormalizationForm;
use crate::report::{sha256_hex, Report};
use crate::Result;

// ── Text API ──────────────────────────────────────────────

/// Normalize `text` to `form`
pub fn normalize(text: &str, form: NormalizationForm) -> String {
    match form {
        NormalizationForm::Nfc => text.nfc().collect(),
        NormalizationForm::Nfd => text.nfd().collect(),
        NormalizationForm::Nfkc => text.nfkc().collect(),
        NormalizationForm::Nfkd => text.nfkd().collect(),
    }
}

/// True when `text` is already a fixed point of `form`
pub fn is_normalized(text: &str, form: NormalizationForm) -> bool {
    match form {
        NormalizationForm::Nfc => unicode_normalization::is_nfc(text),
        NormalizationForm::Nfd => unicode_normalization::is_nfd(text),
        NormalizationForm::Nfkc => unicode_normalization::is_nfkc(text),
        NormalizationForm::Nfkd => unicode_normalization::is_nfkd(text),
    }
}

/// Position of the first character of `text` that `form` would change
///
/// Returns `None` when `text` is already normalized.
pub fn first_difference(text: &str, form: NormalizationForm) -> Option<Position> {
    if is_normalized(text, form) {
        return None;
    }
    diff_position(text, &normalize(text, form))
}

fn diff_position(original: &str, normalized: &str) -> Option<Position> {
    let mut norm = normalized.chars();
    for (offset, c) in original.char_indices() {
        if norm.next() != Some(c) {
            return Some(Position::locate(original, offset));
        }
    }
    // Original exhausted; any leftover output counts as a change at the end
    norm.next().map(|_| Position::locate(original, original.len()))
}

// ── File API ──────────────────────────────────────────────

/// Options for one normalization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub form: NormalizationForm,
    /// Destination; `None` rewrites the input in place
    pub output: Option<PathBuf>,
    /// Inspect only, never write
    pub check_only: bool,
}

/// Single-file normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Normalizer { options }
    }

    /// Normalize the file at `input`
    ///
    /// # Errors
    /// `InputNotFound`/`NotAFile`/`Read` if the input cannot be read,
    /// `Decode` if it is not UTF-8, `Write` if the output cannot be replaced.
    /// On any error the output file is left as it was.
    pub fn run(&self, input: &Path) -> Result<Report> {
        let form = self.options.form;
        debug!(input = %input.display(), %form, "normalizing");

        let bytes = file::read_input(input)?;
        let text = decode::decode(input, &bytes)?;

        let normalized = if is_normalized(text, form) {
            text.to_owned()
        } else {
            normalize(text, form)
        };
        let changed = normalized.as_bytes() != bytes.as_slice();
        let first_difference = if changed {
            diff_position(text, &normalized)
        } else {
            None
        };

        let mut report = Report {
            input: input.to_path_buf(),
            output: None,
            form,
            bytes_in: bytes.len(),
            bytes_out: normalized.len(),
            changed,
            written: false,
            first_difference,
            sha256_before: sha256_hex(&bytes),
            sha256_after: sha256_hex(normalized.as_bytes()),
        };

        if self.options.check_only {
            debug!(changed, "check only, nothing written");
            return Ok(report);
        }

        let target = self.options.output.as_deref().unwrap_or(input);
        report.output = Some(target.to_path_buf());

        if !changed && same_file(input, target) {
            debug!(path = %target.display(), "already normalized, skipping rewrite");
            return Ok(report);
        }

        file::write_output(target, normalized.as_bytes())?;
        report.written = true;
        info!(
            "normalized '{}' to '{}' using {}",
            input.display(),
            target.display(),
            form
        );
        Ok(report)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
