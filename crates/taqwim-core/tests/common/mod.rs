use jiff::{Timestamp, ToSpan};
use taqwim_core::{DateFormatter, DateFormatterBuilder};

/// Helper function to create a formatter in the default display timezone
pub fn create_test_formatter() -> DateFormatter {
    DateFormatterBuilder::new()
        .build()
        .expect("Failed to create formatter")
}

/// Parses an RFC 3339 instant
pub fn ts(s: &str) -> Timestamp {
    s.parse().expect("Failed to parse timestamp")
}

/// `base` shifted by `seconds`
pub fn plus_seconds(base: Timestamp, seconds: i64) -> Timestamp {
    base.checked_add(seconds.seconds())
        .expect("Timestamp out of range")
}
