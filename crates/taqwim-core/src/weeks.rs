//! Cohort program week arithmetic.
//!
//! Activities and announcements are grouped by program week, counted from
//! the cohort's start date. Week 1 starts on the start date itself.

use std::fmt;

use jiff::{civil::Date, Span, Timestamp, ToSpan};
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// First and last day of a program week, both inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekRange {
    pub start: Date,
    pub end: Date,
}

impl WeekRange {
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.start, self.end)
    }
}

/// Days covered by week `week_number` of a program starting on
/// `program_start`.
///
/// # Errors
///
/// Returns `FormatError::InvalidInput` if the week falls outside the
/// supported calendar range.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use taqwim_core::weeks::week_range;
///
/// let week = week_range(3, date(2025, 9, 7)).unwrap();
/// assert_eq!(week.start, date(2025, 9, 21));
/// assert_eq!(week.end, date(2025, 9, 27));
/// ```
pub fn week_range(week_number: i64, program_start: Date) -> Result<WeekRange> {
    let out_of_range = |e: jiff::Error| {
        FormatError::invalid_input("week_number")
            .with_reason(format!("week {week_number} is out of range: {e}"))
    };

    let offset_days = week_number
        .checked_sub(1)
        .and_then(|w| w.checked_mul(7))
        .ok_or_else(|| {
            FormatError::invalid_input("week_number")
                .with_reason(format!("week {week_number} is out of range"))
        })?;

    let offset = Span::new().try_days(offset_days).map_err(out_of_range)?;
    let start = program_start.checked_add(offset).map_err(out_of_range)?;
    let end = start.checked_add(6.days()).map_err(out_of_range)?;

    Ok(WeekRange { start, end })
}

/// Whether `t` lies between `start` and `end`, both inclusive.
pub fn is_in_range(t: Timestamp, start: Timestamp, end: Timestamp) -> bool {
    start <= t && t <= end
}

/// Program week containing `now`, with week 1 beginning at `program_start`.
///
/// Instants before the program start yield zero or negative week numbers.
pub fn current_week_number(program_start: Timestamp, now: Timestamp) -> i64 {
    let elapsed_days = (now.as_second() - program_start.as_second()).div_euclid(SECONDS_PER_DAY);
    elapsed_days.div_euclid(7) + 1
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_week_starts_on_program_start() {
        let week = week_range(1, date(2025, 9, 7)).unwrap();
        assert_eq!(week.start, date(2025, 9, 7));
        assert_eq!(week.end, date(2025, 9, 13));
        assert!(week.contains(date(2025, 9, 13)));
        assert!(!week.contains(date(2025, 9, 14)));
    }

    #[test]
    fn test_week_range_crosses_year() {
        let week = week_range(17, date(2025, 9, 7)).unwrap();
        assert_eq!(week.start, date(2025, 12, 28));
        assert_eq!(week.end, date(2026, 1, 3));
        assert_eq!(week.to_string(), "2025-12-28 – 2026-01-03");
    }

    #[test]
    fn test_week_range_out_of_range() {
        let err = week_range(i64::MAX, date(2025, 9, 7)).unwrap_err();
        assert!(matches!(err, FormatError::InvalidInput { .. }));
        assert!(week_range(2_000_000, date(2025, 9, 7)).is_err());
    }

    #[test]
    fn test_is_in_range_inclusive() {
        let start = ts("2025-09-07T00:00:00Z");
        let end = ts("2025-09-13T23:59:59Z");
        assert!(is_in_range(start, start, end));
        assert!(is_in_range(end, start, end));
        assert!(!is_in_range(ts("2025-09-14T00:00:00Z"), start, end));
    }

    #[test]
    fn test_current_week_number() {
        let start = ts("2025-09-07T06:00:00Z");
        assert_eq!(current_week_number(start, start), 1);
        assert_eq!(current_week_number(start, ts("2025-09-13T23:00:00Z")), 1);
        assert_eq!(current_week_number(start, ts("2025-09-14T06:00:00Z")), 2);
        assert_eq!(current_week_number(start, ts("2025-09-06T06:00:00Z")), 0);
    }
}
