//! Unicode normalization forms

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the four standard Unicode normalization forms
///
/// Canonical forms (NFC, NFD) only touch canonically equivalent sequences.
/// Compatibility forms (NFKC, NFKD) also fold compatibility characters such
/// as ligatures, full-width letters and superscripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationForm {
    /// Canonical decomposition, then canonical composition
    #[default]
    Nfc,
    /// Canonical decomposition
    Nfd,
    /// Compatibility decomposition, then canonical composition
    Nfkc,
    /// Compatibility decomposition
    Nfkd,
}

impl NormalizationForm {
    pub const ALL: [NormalizationForm; 4] = [
        NormalizationForm::Nfc,
        NormalizationForm::Nfd,
        NormalizationForm::Nfkc,
        NormalizationForm::Nfkd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        }
    }

    /// True for NFKC and NFKD
    pub fn is_compatibility(self) -> bool {
        matches!(self, NormalizationForm::Nfkc | NormalizationForm::Nfkd)
    }

    /// True for NFC and NFKC
    pub fn is_composed(self) -> bool {
        matches!(self, NormalizationForm::Nfc | NormalizationForm::Nfkc)
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    /// Parse a form name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalizationForm::ALL
            .into_iter()
            .find(|form| form.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidForm(s.to_string()))
    }
}
