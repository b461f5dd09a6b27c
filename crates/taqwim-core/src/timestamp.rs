//! Conversion of caller input into instants.
//!
//! Records arrive with timestamps as RFC 3339 strings, epoch milliseconds, or
//! already-parsed values. [`ToTimestamp`] normalises all of them so the
//! formatter can reject malformed input with `InvalidTimestamp` instead of
//! producing garbage text.

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp, Zoned,
};

use crate::error::{FormatError, Result};

/// Anything that can be resolved to a single instant.
///
/// `zone` is only consulted for inputs that carry no offset of their own.
pub trait ToTimestamp {
    fn to_timestamp(&self, zone: &TimeZone) -> Result<Timestamp>;
}

impl ToTimestamp for Timestamp {
    fn to_timestamp(&self, _zone: &TimeZone) -> Result<Timestamp> {
        Ok(*self)
    }
}

impl ToTimestamp for Zoned {
    fn to_timestamp(&self, _zone: &TimeZone) -> Result<Timestamp> {
        Ok(self.timestamp())
    }
}

/// Milliseconds since the Unix epoch.
impl ToTimestamp for i64 {
    fn to_timestamp(&self, _zone: &TimeZone) -> Result<Timestamp> {
        Timestamp::from_millisecond(*self)
            .map_err(|e| FormatError::invalid_timestamp(self.to_string()).with_reason(e))
    }
}

impl ToTimestamp for str {
    fn to_timestamp(&self, zone: &TimeZone) -> Result<Timestamp> {
        parse_timestamp(self, zone)
    }
}

impl ToTimestamp for String {
    fn to_timestamp(&self, zone: &TimeZone) -> Result<Timestamp> {
        parse_timestamp(self, zone)
    }
}

impl<T: ToTimestamp + ?Sized> ToTimestamp for &T {
    fn to_timestamp(&self, zone: &TimeZone) -> Result<Timestamp> {
        (**self).to_timestamp(zone)
    }
}

/// Parses a timestamp string.
///
/// Accepted forms, tried in order:
///
/// - RFC 3339 / ISO 8601 with an offset (`2025-10-19T05:30:00Z`,
///   `2025-10-19 05:30:00.123+00:00`)
/// - a bare date (`2025-10-19`), taken as UTC midnight
/// - a date-time without offset (`2025-10-19T08:30`), taken in `zone`
///
/// # Errors
///
/// Returns `FormatError::InvalidTimestamp` when none of the forms match.
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use taqwim_core::timestamp::parse_timestamp;
///
/// let ts = parse_timestamp("2025-10-19", &TimeZone::UTC).unwrap();
/// assert_eq!(ts.to_string(), "2025-10-19T00:00:00Z");
/// assert!(parse_timestamp("not a date", &TimeZone::UTC).is_err());
/// ```
pub fn parse_timestamp(input: &str, zone: &TimeZone) -> Result<Timestamp> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormatError::invalid_timestamp(input).with_reason("empty input"));
    }

    let offset_err = match trimmed.parse::<Timestamp>() {
        Ok(ts) => return Ok(ts),
        Err(e) => e,
    };

    // A time component means local wall-clock time; a bare date is UTC.
    let zoned = if trimmed.contains(':') {
        trimmed
            .parse::<DateTime>()
            .ok()
            .map(|datetime| datetime.to_zoned(zone.clone()))
    } else {
        trimmed
            .parse::<Date>()
            .ok()
            .map(|date| date.to_zoned(TimeZone::UTC))
    };

    if let Some(zoned) = zoned {
        return zoned
            .map(|zoned| zoned.timestamp())
            .map_err(|e| FormatError::invalid_timestamp(input).with_reason(e));
    }

    Err(FormatError::invalid_timestamp(input).with_reason(offset_err))
}
