//! Relative ("3 hours ago") phrasing.

use jiff::Timestamp;

use super::DateFormatter;
use crate::{
    error::Result,
    models::{Calendar, Language},
    timestamp::ToTimestamp,
    vocabulary::{ago, just_now, RelativeUnit},
};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

impl DateFormatter {
    /// Describes how long before `now` the `timestamp` happened.
    ///
    /// Future timestamps and anything four weeks or older are rendered as an
    /// absolute Gregorian date without time.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidTimestamp` if `timestamp` is not a valid
    /// instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::{Timestamp, ToSpan};
    /// use taqwim_core::{DateFormatter, Language};
    ///
    /// let formatter = DateFormatter::default();
    /// let posted: Timestamp = "2025-10-19T05:30:00Z".parse().unwrap();
    /// let now = posted.checked_add(125.seconds()).unwrap();
    /// assert_eq!(
    ///     formatter.format_relative(&posted, now, Language::English).unwrap(),
    ///     "2 minutes ago"
    /// );
    /// ```
    pub fn format_relative<T: ToTimestamp + ?Sized>(
        &self,
        timestamp: &T,
        now: Timestamp,
        language: Language,
    ) -> Result<String> {
        let instant = timestamp.to_timestamp(&self.time_zone)?;
        let elapsed_ms = now.as_millisecond() - instant.as_millisecond();

        let phrase = if elapsed_ms < 0 {
            None
        } else {
            relative_phrase(elapsed_ms / 1000, language)
        };

        match phrase {
            Some(phrase) => Ok(self.localize(phrase, language)),
            None => self.format_absolute(&instant, language, Calendar::Gregorian, false),
        }
    }
}

/// Phrase for a non-negative elapsed time, or `None` past four weeks.
///
/// Buckets are checked in order and each count is floored, so exactly 3600
/// seconds is "1 hour ago".
pub fn relative_phrase(elapsed_secs: i64, language: Language) -> Option<String> {
    match elapsed_secs {
        s if s < 0 => None,
        s if s < MINUTE => Some(just_now(language).to_string()),
        s if s < HOUR => Some(ago(language, s / MINUTE, RelativeUnit::Minute)),
        s if s < DAY => Some(ago(language, s / HOUR, RelativeUnit::Hour)),
        s if s < WEEK => Some(ago(language, s / DAY, RelativeUnit::Day)),
        s if s < 4 * WEEK => Some(ago(language, s / WEEK, RelativeUnit::Week)),
        _ => None,
    }
}
