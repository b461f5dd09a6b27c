//! Locale- and calendar-aware date formatting.
//!
//! This module provides the main [`DateFormatter`] interface. A formatter is
//! configured once with a display timezone and numeral system and then turns
//! instants into display strings:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   ToTimestamp   │    │  DateFormatter  │    │    Rendered     │
//! │ (str, i64, ts)  │───▶│ (zone, numerals)│───▶│  text + flags   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`DateFormatter`] instances
//! - [`absolute`]: Calendar date (and time) rendering, single or dual
//! - [`relative`]: "N minutes ago" phrasing
//!
//! Every operation is a pure function of its arguments and the formatter's
//! configuration. The formatter never reads the clock; callers pass `now`.
//!
//! # Usage Examples
//!
//! ```rust
//! use taqwim_core::{Calendar, CalendarView, DateFormatterBuilder, Language};
//!
//! let formatter = DateFormatterBuilder::new().build().unwrap();
//!
//! let text = formatter
//!     .format_absolute("2025-10-19T05:30:00Z", Language::English, Calendar::Gregorian, true)
//!     .unwrap();
//! assert_eq!(text, "19 Oct 2025, 08:30");
//!
//! let both = formatter
//!     .format_absolute("2025-10-19T05:30:00Z", Language::Arabic, CalendarView::Dual, false)
//!     .unwrap();
//! assert_eq!(both, "26 ربيع الآخر 1447 هـ (19 أكتوبر 2025)");
//! ```

use jiff::tz::{self, TimeZone};
use log::{debug, warn};

use crate::{
    error::Result,
    models::{Language, Numerals},
    numbers::localize_digits,
};

pub mod absolute;
pub mod builder;
pub mod relative;


pub use builder::DateFormatterBuilder;

/// IANA name of the default display timezone.
pub const DEFAULT_TIME_ZONE: &str = "Asia/Riyadh";

/// Text substituted for timestamps that cannot be displayed.
pub const PLACEHOLDER: &str = "—";

/// Main formatter interface.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pub(crate) time_zone: TimeZone,
    pub(crate) numerals: Numerals,
}

impl DateFormatter {
    pub(crate) fn new(time_zone: TimeZone, numerals: Numerals) -> Self {
        Self {
            time_zone,
            numerals,
        }
    }

    /// Display timezone all instants are rendered in.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn numerals(&self) -> Numerals {
        self.numerals
    }

    // Arabic text honours the configured digit set; English is always Latin.
    pub(crate) fn localize(&self, text: String, language: Language) -> String {
        match language {
            Language::Arabic if self.numerals != Numerals::Latin => {
                localize_digits(&text, self.numerals)
            }
            _ => text,
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(default_time_zone(), Numerals::default())
    }
}

/// Resolves [`DEFAULT_TIME_ZONE`].
///
/// Falls back to a fixed `+03:00` offset if the timezone database has no
/// entry for it. Riyadh has not observed DST since 1950.
pub fn default_time_zone() -> TimeZone {
    TimeZone::get(DEFAULT_TIME_ZONE).unwrap_or_else(|e| {
        warn!("Timezone {DEFAULT_TIME_ZONE} unavailable ({e}), using fixed +03:00");
        TimeZone::fixed(tz::offset(3))
    })
}

/// Substitutes [`PLACEHOLDER`] for a failed formatting call.
///
/// This is what display code does with an `InvalidTimestamp` instead of
/// failing the whole page.
///
/// # Examples
///
/// ```rust
/// use taqwim_core::{or_placeholder, Calendar, DateFormatter, Language};
///
/// let formatter = DateFormatter::default();
/// let text = or_placeholder(formatter.format_absolute(
///     "Invalid Date",
///     Language::English,
///     Calendar::Gregorian,
///     false,
/// ));
/// assert_eq!(text, "—");
/// ```
pub fn or_placeholder(result: Result<String>) -> String {
    result.unwrap_or_else(|e| {
        debug!("Substituting placeholder: {e}");
        PLACEHOLDER.to_string()
    })
}
