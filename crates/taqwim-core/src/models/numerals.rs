//! Digit sets for Arabic output.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Digit set used when rendering Arabic text.
///
/// English text always uses Latin digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Numerals {
    /// `0123456789`
    #[default]
    Latin,

    /// `٠١٢٣٤٥٦٧٨٩`
    ArabicIndic,
}

impl FromStr for Numerals {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latin" | "latn" => Ok(Numerals::Latin),
            "arabic-indic" | "arab" => Ok(Numerals::ArabicIndic),
            _ => Err(FormatError::invalid_input("numerals")
                .with_reason(format!("expected 'latin' or 'arabic-indic', got '{s}'"))),
        }
    }
}
