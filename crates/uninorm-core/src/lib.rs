//! uninorm core — rewrite text files in a chosen Unicode normalization form
//!
//! Normalizing text to a single form gives every string one byte
//! representation, so visually identical text compares equal and cannot hide
//! behind alternative encodings of the same characters.
//!
//! # Architecture
//!
//! ```text
//! file bytes → decode (UTF-8) → normalize (NFC/NFD/NFKC/NFKD) → atomic write
//!                                     ↓
//!                                  Report (sizes, digests, first change)
//! ```
//!
//! The normalization algorithm is provided by `unicode-normalization`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use uninorm_core::{NormalizationForm, NormalizeOptions, Normalizer};
//!
//! let report = Normalizer::new(NormalizeOptions {
//!     form: NormalizationForm::Nfc,
//!     ..Default::default()
//! })
//! .run(Path::new("notes.txt"))?;
//! println!("{}", report.summary());
//! # Ok::<(), uninorm_core::Error>(())
//! ```

pub mod decode;
pub mod error;
pub mod file;
pub mod form;
pub mod normalizer;
pub mod report;

pub use decode::Position;
pub use error::{Error, Result};
pub use form::NormalizationForm;
pub use normalizer::{first_difference, is_normalized, normalize, NormalizeOptions, Normalizer};
pub use report::Report;
