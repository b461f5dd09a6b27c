//! Tabular Hijri calendar arithmetic.
//!
//! Dates are converted through Julian Day Numbers using the civil (Friday)
//! epoch and the usual 30-year cycle with 11 leap years. This is the
//! arithmetic variant ECMA-402 engines canonicalise `islamic` to, so results
//! can differ by a day from sighting-based calendars such as Umm al-Qura.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Julian Day Number of 1 Muharram 1 AH (19 July 622, proleptic Gregorian).
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

const CALENDAR: &str = "islamic";

/// A day in the Hijri calendar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    pub year: i32,
    /// 1 = Muharram, 12 = Dhu al-Hijjah
    pub month: u8,
    pub day: u8,
}

impl HijriDate {
    /// Validates and creates a Hijri date.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::CalendarUnsupported` for years before 1 AH or
    /// month/day values outside the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if year < 1 {
            return Err(unsupported(format!("year {year} precedes the Hijri epoch")));
        }
        if !(1..=12).contains(&month) {
            return Err(unsupported(format!("month {month} is out of range")));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(unsupported(format!(
                "day {day} is out of range for {year}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Converts a proleptic Gregorian date to the Hijri calendar.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::CalendarUnsupported` for dates before the Hijri
    /// epoch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use taqwim_core::hijri::HijriDate;
    ///
    /// let hijri = HijriDate::from_gregorian(date(2025, 10, 19)).unwrap();
    /// assert_eq!((hijri.year, hijri.month, hijri.day), (1447, 4, 26));
    /// ```
    pub fn from_gregorian(date: Date) -> Result<Self> {
        let jdn = gregorian_to_jdn(date);
        if jdn < HIJRI_EPOCH_JDN {
            return Err(unsupported(format!("{date} precedes the Hijri epoch")));
        }

        let year = (30 * (jdn - HIJRI_EPOCH_JDN) + 10_646).div_euclid(10_631);
        let into_year = jdn - 29 - hijri_to_jdn(year, 1, 1);
        let month = (ceil_div(2 * into_year, 59) + 1).clamp(1, 12);
        let day = jdn - hijri_to_jdn(year, month, 1) + 1;

        Ok(Self {
            year: i32::try_from(year).map_err(|_| unsupported(format!("{date} is out of range")))?,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Converts back to the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::CalendarUnsupported` if the result does not fit
    /// in the supported Gregorian range.
    pub fn to_gregorian(&self) -> Result<Date> {
        let jdn = hijri_to_jdn(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        jdn_to_gregorian(jdn)
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

/// Whether `year` has 355 days (Dhu al-Hijjah gets a 30th day).
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Odd months have 30 days, even months 29, except Dhu al-Hijjah in leap years.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
        30
    } else {
        29
    }
}

fn unsupported(reason: String) -> FormatError {
    FormatError::CalendarUnsupported {
        calendar: CALENDAR,
        reason,
    }
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -(-a).div_euclid(b)
}

fn hijri_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    day + ceil_div(59 * (month - 1), 2)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + HIJRI_EPOCH_JDN
        - 1
}

fn gregorian_to_jdn(date: Date) -> i64 {
    let (y, m, d) = (
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    );
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32_045
}

fn jdn_to_gregorian(jdn: i64) -> Result<Date> {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    let year = i16::try_from(year).map_err(|_| unsupported(format!("JDN {jdn} is out of range")))?;
    Date::new(year, month as i8, day as i8).map_err(|e| unsupported(e.to_string()))
}
