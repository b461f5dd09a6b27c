//! Core library for bilingual Gregorian/Hijri date display.
//!
//! This crate turns instants into the strings shown across an English/Arabic
//! cohort portal: calendar dates in either or both calendars, times of day in
//! a fixed display timezone, and "N minutes ago" phrases.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): language, calendar, numeral and result types
//! - **Formatter** ([`formatter`]): the [`DateFormatter`] and its builder
//! - **Calendar arithmetic** ([`hijri`]): tabular Hijri conversion
//! - **Helpers** ([`weeks`], [`numbers`], [`locale`]): program weeks, counter
//!   formatting, language detection
//! - **Settings** ([`config`]): JSON settings in the XDG config directory
//!
//! Formatting never touches the clock or the filesystem. Only
//! [`Settings::load`] and [`Settings::save`] perform I/O.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::Timestamp;
//! use taqwim_core::{Calendar, DateFormatterBuilder, Language};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let formatter = DateFormatterBuilder::new()
//!     .with_time_zone_name(Some("Asia/Riyadh"))
//!     .build()?;
//!
//! let posted = "2025-10-19T05:30:00Z";
//! let hijri = formatter.format_absolute(posted, Language::Arabic, Calendar::Islamic, false)?;
//! assert_eq!(hijri, "26 ربيع الآخر 1447 هـ");
//!
//! let now: Timestamp = "2025-10-19T06:00:00Z".parse()?;
//! let relative = formatter.format_relative(posted, now, Language::English)?;
//! assert_eq!(relative, "30 minutes ago");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod formatter;
pub mod hijri;
pub mod locale;
pub mod models;
pub mod numbers;
pub mod timestamp;
pub mod vocabulary;
pub mod weeks;

// Re-export commonly used types
pub use config::Settings;
pub use display::CalendarReport;
pub use error::{FormatError, Result};
pub use formatter::{
    or_placeholder, DateFormatter, DateFormatterBuilder, DEFAULT_TIME_ZONE, PLACEHOLDER,
};
pub use hijri::HijriDate;
pub use models::{Calendar, CalendarView, Language, Numerals, Rendered, TextDirection};
pub use timestamp::{parse_timestamp, ToTimestamp};
pub use weeks::WeekRange;
