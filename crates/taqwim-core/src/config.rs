//! Display settings loaded from a JSON file.
//!
//! Without an explicit path the settings are read from
//! `$XDG_CONFIG_HOME/taqwim/config.json` when that file exists; otherwise the
//! defaults apply.
//!
//! ```json
//! {
//!   "time_zone": "Asia/Riyadh",
//!   "language": "ar",
//!   "numerals": "arabic-indic",
//!   "show_hijri": true
//! }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FormatError, Result},
    formatter::{DateFormatter, DateFormatterBuilder, DEFAULT_TIME_ZONE},
    models::{Language, Numerals},
};

const CONFIG_FILE: &str = "config.json";

/// User-level display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// IANA name of the display timezone
    pub time_zone: String,
    pub language: Language,
    pub numerals: Numerals,
    /// Show the Hijri date alongside the Gregorian one
    pub show_hijri: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            language: Language::default(),
            numerals: Numerals::default(),
            show_hijri: false,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the XDG config file.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FileSystem` if an explicit `path` cannot be read
    /// Returns `FormatError::Serialization` if the file is not valid settings
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    debug!("No settings file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading settings from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|e| FormatError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::FileSystem` if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FormatError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| FormatError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Path new settings should be written to, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::XdgDirectory` if the config directory cannot be
    /// created
    pub fn place_config_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("taqwim")
            .place_config_file(CONFIG_FILE)
            .map_err(|e| FormatError::XdgDirectory(e.to_string()))
    }

    /// Builds a formatter for these settings.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Configuration` if the timezone name is unknown
    pub fn formatter(&self) -> Result<DateFormatter> {
        DateFormatterBuilder::new()
            .with_time_zone_name(Some(&self.time_zone))
            .with_numerals(self.numerals)
            .build()
    }

    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("taqwim").find_config_file(CONFIG_FILE)
    }
}
