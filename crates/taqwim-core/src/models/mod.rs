//! Data models for the formatter.
//!
//! This module contains the small value types that configure a formatting
//! call (language, calendar, numeral system) and the value it returns.

pub mod calendar;
pub mod language;
pub mod numerals;
pub mod rendered;

pub use calendar::{Calendar, CalendarView};
pub use language::{Language, TextDirection};
pub use numerals::Numerals;
pub use rendered::Rendered;
