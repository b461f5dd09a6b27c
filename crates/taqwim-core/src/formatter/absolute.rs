//! Absolute date rendering in one or both calendars.

use jiff::Zoned;
use log::debug;

use super::DateFormatter;
use crate::{
    error::{FormatError, Result},
    hijri::HijriDate,
    models::{Calendar, CalendarView, Language, Rendered},
    timestamp::ToTimestamp,
    vocabulary::{hijri_era, month_name, time_separator},
};

impl DateFormatter {
    /// Renders `timestamp` as a calendar date in the display timezone.
    ///
    /// `view` is either a single [`Calendar`] or [`CalendarView::Dual`]. A
    /// Hijri rendering that cannot be produced falls back to Gregorian.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidTimestamp` if `timestamp` is not a valid
    /// instant.
    pub fn format_absolute<T: ToTimestamp + ?Sized>(
        &self,
        timestamp: &T,
        language: Language,
        view: impl Into<CalendarView>,
        include_time: bool,
    ) -> Result<String> {
        self.render_absolute(timestamp, language, view, include_time)
            .map(Rendered::into_string)
    }

    /// Same as [`DateFormatter::format_absolute`], but reports which
    /// calendar was used and whether the Gregorian fallback kicked in.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidTimestamp` if `timestamp` is not a valid
    /// instant.
    pub fn render_absolute<T: ToTimestamp + ?Sized>(
        &self,
        timestamp: &T,
        language: Language,
        view: impl Into<CalendarView>,
        include_time: bool,
    ) -> Result<Rendered> {
        let zoned = timestamp
            .to_timestamp(&self.time_zone)?
            .to_zoned(self.time_zone.clone());

        let rendered = match view.into() {
            CalendarView::Single(Calendar::Gregorian) => Rendered {
                text: gregorian(&zoned, language, include_time),
                calendar: Calendar::Gregorian,
                used_fallback: false,
            },
            CalendarView::Single(Calendar::Islamic) => {
                match hijri(&zoned, language, include_time) {
                    Ok(text) => Rendered {
                        text,
                        calendar: Calendar::Islamic,
                        used_fallback: false,
                    },
                    Err(e) => fallback(&zoned, language, include_time, &e),
                }
            }
            CalendarView::Dual => match hijri(&zoned, language, include_time) {
                Ok(hijri_text) => {
                    let gregorian_text = gregorian(&zoned, language, include_time);
                    let (primary, _) = CalendarView::dual_order(language);
                    let text = match primary {
                        Calendar::Islamic => format!("{hijri_text} ({gregorian_text})"),
                        Calendar::Gregorian => format!("{gregorian_text} ({hijri_text})"),
                    };
                    Rendered {
                        text,
                        calendar: primary,
                        used_fallback: false,
                    }
                }
                Err(e) => fallback(&zoned, language, include_time, &e),
            },
        };

        Ok(Rendered {
            text: self.localize(rendered.text, language),
            ..rendered
        })
    }

    /// The "today" line shown in the page header.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidTimestamp` if `now` is not a valid instant.
    pub fn format_today<T: ToTimestamp + ?Sized>(
        &self,
        now: &T,
        language: Language,
        show_hijri: bool,
    ) -> Result<String> {
        let view = if show_hijri {
            CalendarView::Dual
        } else {
            CalendarView::Single(Calendar::Gregorian)
        };
        self.format_absolute(now, language, view, false)
    }
}

fn fallback(
    zoned: &Zoned,
    language: Language,
    include_time: bool,
    cause: &FormatError,
) -> Rendered {
    debug!("Falling back to Gregorian for {}: {cause}", zoned.timestamp());
    Rendered {
        text: gregorian(zoned, language, include_time),
        calendar: Calendar::Gregorian,
        used_fallback: true,
    }
}

fn gregorian(zoned: &Zoned, language: Language, include_time: bool) -> String {
    let date = format!(
        "{:02} {} {}",
        zoned.day(),
        month_name(Calendar::Gregorian, language, zoned.month() as u8),
        padded_year(zoned.year())
    );
    with_time(date, zoned, language, include_time)
}

/// Four-digit year with the sign outside the padding (`0622`, `-0050`).
pub(crate) fn padded_year(year: i16) -> String {
    let sign = if year < 0 { "-" } else { "" };
    format!("{sign}{:04}", year.unsigned_abs())
}

fn hijri(zoned: &Zoned, language: Language, include_time: bool) -> Result<String> {
    let hijri = HijriDate::from_gregorian(zoned.date())?;
    let date = format!(
        "{:02} {} {} {}",
        hijri.day,
        month_name(Calendar::Islamic, language, hijri.month),
        hijri.year,
        hijri_era(language)
    );
    Ok(with_time(date, zoned, language, include_time))
}

fn with_time(date: String, zoned: &Zoned, language: Language, include_time: bool) -> String {
    if include_time {
        format!(
            "{date}{}{:02}:{:02}",
            time_separator(language),
            zoned.hour(),
            zoned.minute()
        )
    } else {
        date
    }
}
