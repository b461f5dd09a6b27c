//! Display languages and their writing direction.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Type-safe enumeration of supported display languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English phrases and Latin script
    #[default]
    #[serde(rename = "en")]
    English,

    /// Arabic phrases, right-to-left
    #[serde(rename = "ar")]
    Arabic,
}

/// Layout direction a caller should use for text in a given language.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    /// Short language tag (`en` or `ar`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::English => TextDirection::Ltr,
            Language::Arabic => TextDirection::Rtl,
        }
    }

    /// Resolve a BCP-47-ish tag by its primary subtag.
    ///
    /// Returns `None` for anything other than English or Arabic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taqwim_core::Language;
    ///
    /// assert_eq!(Language::from_tag("ar-SA"), Some(Language::Arabic));
    /// assert_eq!(Language::from_tag("en_US"), Some(Language::English));
    /// assert_eq!(Language::from_tag("fr"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::English),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| {
            FormatError::invalid_input("language")
                .with_reason(format!("expected 'en' or 'ar', got '{s}'"))
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}
