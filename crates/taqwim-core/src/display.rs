//! Markdown report of every rendering of one instant.
//!
//! The report is what the CLI prints for `show`, and is handy when checking
//! how a record's timestamp will look across the bilingual UI.

use std::fmt;

use jiff::Timestamp;

use crate::{
    formatter::{or_placeholder, DateFormatter},
    models::{Calendar, CalendarView, Language},
};

/// Wrapper type for displaying all renderings of a timestamp.
pub struct CalendarReport<'a> {
    formatter: &'a DateFormatter,
    instant: Timestamp,
    now: Option<Timestamp>,
    include_time: bool,
}

impl<'a> CalendarReport<'a> {
    pub fn new(formatter: &'a DateFormatter, instant: Timestamp) -> Self {
        Self {
            formatter,
            instant,
            now: None,
            include_time: true,
        }
    }

    /// Adds relative phrasing measured against `now`.
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    pub fn without_time(mut self) -> Self {
        self.include_time = false;
        self
    }

    fn write_language(&self, f: &mut fmt::Formatter<'_>, language: Language) -> fmt::Result {
        let heading = match language {
            Language::English => "English",
            Language::Arabic => "العربية",
        };
        writeln!(f, "## {heading}")?;
        writeln!(f)?;

        let views = [
            ("Gregorian", CalendarView::Single(Calendar::Gregorian)),
            ("Hijri", CalendarView::Single(Calendar::Islamic)),
            ("Both", CalendarView::Dual),
        ];
        for (label, view) in views {
            let text = or_placeholder(self.formatter.format_absolute(
                &self.instant,
                language,
                view,
                self.include_time,
            ));
            writeln!(f, "- **{label}**: {text}")?;
        }

        if let Some(now) = self.now {
            let text =
                or_placeholder(self.formatter.format_relative(&self.instant, now, language));
            writeln!(f, "- **Relative**: {text}")?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for CalendarReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.instant)?;
        writeln!(f)?;
        writeln!(
            f,
            "**Time zone**: {}",
            self.formatter.time_zone().iana_name().unwrap_or("fixed offset")
        )?;
        writeln!(f)?;

        self.write_language(f, Language::English)?;
        self.write_language(f, Language::Arabic)
    }
}
