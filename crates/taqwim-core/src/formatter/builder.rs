//! Builder for creating and configuring DateFormatter instances.

use jiff::tz::TimeZone;

use super::{default_time_zone, DateFormatter};
use crate::{
    error::{FormatError, Result},
    models::Numerals,
};

/// Builder for creating and configuring DateFormatter instances.
#[derive(Debug, Clone, Default)]
pub struct DateFormatterBuilder {
    time_zone_name: Option<String>,
    time_zone: Option<TimeZone>,
    numerals: Numerals,
}

impl DateFormatterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display timezone by IANA name.
    ///
    /// If not specified, uses [`super::DEFAULT_TIME_ZONE`].
    pub fn with_time_zone_name<S: AsRef<str>>(mut self, name: Option<S>) -> Self {
        if let Some(name) = name {
            self.time_zone_name = Some(name.as_ref().to_string());
            self.time_zone = None;
        }
        self
    }

    /// Sets an already-resolved display timezone.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self.time_zone_name = None;
        self
    }

    /// Sets the digit set used for Arabic output.
    pub fn with_numerals(mut self, numerals: Numerals) -> Self {
        self.numerals = numerals;
        self
    }

    /// Builds the configured formatter.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Configuration` if the timezone name is unknown
    pub fn build(self) -> Result<DateFormatter> {
        let time_zone = match (self.time_zone, self.time_zone_name) {
            (Some(zone), _) => zone,
            (None, Some(name)) => {
                TimeZone::get(&name).map_err(|e| FormatError::Configuration {
                    message: format!("Unknown timezone '{name}': {e}"),
                })?
            }
            (None, None) => default_time_zone(),
        };

        Ok(DateFormatter::new(time_zone, self.numerals))
    }
}
