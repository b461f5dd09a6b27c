//! Result of an absolute rendering.

use std::fmt;

use crate::models::Calendar;

/// Formatted text together with how it was produced.
///
/// `used_fallback` is set when a Hijri rendering was requested but the date
/// could not be expressed in that calendar, so Gregorian was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Primary calendar of `text`
    pub calendar: Calendar,
    pub used_fallback: bool,
}

impl Rendered {
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Rendered> for String {
    fn from(rendered: Rendered) -> Self {
        rendered.text
    }
}
