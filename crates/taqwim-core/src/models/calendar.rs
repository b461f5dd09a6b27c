//! Calendar systems and the single/dual view selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::FormatError, models::Language};

/// Calendrical system used to render year, month and day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[default]
    Gregorian,

    /// Tabular Hijri calendar
    Islamic,
}

impl Calendar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Calendar::Gregorian => "gregorian",
            Calendar::Islamic => "islamic",
        }
    }
}

impl FromStr for Calendar {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gregorian" | "gregory" => Ok(Calendar::Gregorian),
            "islamic" | "hijri" | "islamic-civil" => Ok(Calendar::Islamic),
            _ => Err(FormatError::invalid_input("calendar")
                .with_reason(format!("expected 'gregorian' or 'islamic', got '{s}'"))),
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which calendar(s) an absolute rendering should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    /// A single calendar
    Single(Calendar),

    /// Both calendars, the secondary in parentheses
    Dual,
}

impl CalendarView {
    /// Primary and secondary calendar for a dual rendering.
    ///
    /// Arabic readers see the Hijri date first, English readers the
    /// Gregorian one.
    pub fn dual_order(language: Language) -> (Calendar, Calendar) {
        match language {
            Language::Arabic => (Calendar::Islamic, Calendar::Gregorian),
            Language::English => (Calendar::Gregorian, Calendar::Islamic),
        }
    }
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView::Single(Calendar::Gregorian)
    }
}

impl From<Calendar> for CalendarView {
    fn from(calendar: Calendar) -> Self {
        CalendarView::Single(calendar)
    }
}

impl FromStr for CalendarView {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" | "dual" => Ok(CalendarView::Dual),
            other => other.parse::<Calendar>().map(CalendarView::Single),
        }
    }
}
