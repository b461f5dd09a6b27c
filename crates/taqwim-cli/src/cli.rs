//! Subcommand arguments and their handlers.
//!
//! Each subcommand has a clap `Args` struct here and a matching method on
//! [`Cli`]. Parsing of languages, calendars and dates is delegated to the
//! `FromStr` implementations in `taqwim-core`, so the CLI accepts exactly the
//! tags the library does.

use anyhow::{Context, Result};
use clap::Args;
use jiff::{civil::Date, Timestamp};
use log::debug;
use taqwim_core::{
    or_placeholder,
    weeks::{current_week_number, week_range},
    CalendarReport, CalendarView, DateFormatter, HijriDate, Settings, ToTimestamp,
};

use crate::renderer::TerminalRenderer;

/// Render a timestamp as a calendar date
#[derive(Args)]
pub struct AbsoluteArgs {
    /// Timestamp (RFC 3339, bare date, or local date-time)
    pub timestamp: String,
    /// Calendar: gregorian, islamic, or both
    #[arg(short, long, default_value = "gregorian")]
    pub calendar: CalendarView,
    /// Include the time of day
    #[arg(short, long)]
    pub time: bool,
}

/// Describe how long ago a timestamp was
#[derive(Args)]
pub struct RelativeArgs {
    /// Timestamp (RFC 3339, bare date, or local date-time)
    pub timestamp: String,
    /// Reference instant; defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

/// Print today's date
#[derive(Args)]
pub struct TodayArgs {
    /// Show the Hijri date alongside the Gregorian one
    #[arg(long)]
    pub hijri: bool,
    /// Reference instant; defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

/// Show every rendering of a timestamp
#[derive(Args)]
pub struct ShowArgs {
    /// Timestamp (RFC 3339, bare date, or local date-time)
    pub timestamp: String,
    /// Reference instant for the relative phrase; defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
    /// Omit the time of day
    #[arg(long)]
    pub date_only: bool,
}

/// Program week ranges and the current week number
#[derive(Args)]
pub struct WeekArgs {
    /// First day of the program (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Week to show the date range of; omit for the current week number
    #[arg(short, long)]
    pub number: Option<i64>,
    /// Reference instant; defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

/// Convert a Gregorian date to the Hijri calendar
#[derive(Args)]
pub struct HijriArgs {
    /// Gregorian date (YYYY-MM-DD)
    pub date: Date,
}

/// Handler for all subcommands.
pub struct Cli {
    formatter: DateFormatter,
    settings: Settings,
    renderer: TerminalRenderer,
    lenient: bool,
}

impl Cli {
    pub fn new(
        formatter: DateFormatter,
        settings: Settings,
        renderer: TerminalRenderer,
        lenient: bool,
    ) -> Self {
        Self {
            formatter,
            settings,
            renderer,
            lenient,
        }
    }

    pub fn absolute(&self, args: AbsoluteArgs) -> Result<()> {
        let result = self.formatter.format_absolute(
            &args.timestamp,
            self.settings.language,
            args.calendar,
            args.time,
        );
        self.print_line(self.finish(result)?)
    }

    pub fn relative(&self, args: RelativeArgs) -> Result<()> {
        let now = self.resolve_now(args.now.as_deref())?;
        let result = self
            .formatter
            .format_relative(&args.timestamp, now, self.settings.language);
        self.print_line(self.finish(result)?)
    }

    pub fn today(&self, args: TodayArgs) -> Result<()> {
        let now = self.resolve_now(args.now.as_deref())?;
        let show_hijri = args.hijri || self.settings.show_hijri;
        let text = self
            .formatter
            .format_today(&now, self.settings.language, show_hijri)
            .context("Failed to format today's date")?;
        self.print_line(text)
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let instant = match args.timestamp.to_timestamp(self.formatter.time_zone()) {
            Ok(instant) => instant,
            Err(e) if self.lenient => {
                return self.print_line(or_placeholder(Err(e)));
            }
            Err(e) => return Err(e).context("Failed to read timestamp"),
        };
        let now = self.resolve_now(args.now.as_deref())?;

        let mut report = CalendarReport::new(&self.formatter, instant).with_now(now);
        if args.date_only {
            report = report.without_time();
        }
        self.renderer.render(&report.to_string())
    }

    pub fn week(&self, args: WeekArgs) -> Result<()> {
        match args.number {
            Some(number) => {
                let range = week_range(number, args.start)
                    .with_context(|| format!("Failed to compute week {number}"))?;
                self.print_line(format!("Week {number}: {range}"))
            }
            None => {
                let start = args
                    .start
                    .to_zoned(self.formatter.time_zone().clone())
                    .context("Program start is out of range")?
                    .timestamp();
                let now = self.resolve_now(args.now.as_deref())?;
                self.print_line(format!("Week {}", current_week_number(start, now)))
            }
        }
    }

    pub fn hijri(&self, args: HijriArgs) -> Result<()> {
        let hijri = HijriDate::from_gregorian(args.date)
            .with_context(|| format!("Failed to convert {}", args.date))?;
        self.print_line(hijri.to_string())
    }

    pub fn init_config(&self) -> Result<()> {
        let path = Settings::place_config_path().context("Failed to locate config directory")?;
        self.settings
            .save(&path)
            .context("Failed to write settings")?;
        self.print_line(format!("Wrote settings to {}", path.display()))
    }

    fn finish(&self, result: taqwim_core::Result<String>) -> Result<String> {
        if self.lenient {
            Ok(or_placeholder(result))
        } else {
            result.context("Failed to format timestamp")
        }
    }

    fn resolve_now(&self, now: Option<&str>) -> Result<Timestamp> {
        match now {
            Some(now) => now
                .to_timestamp(self.formatter.time_zone())
                .context("Invalid --now value"),
            None => {
                let now = Timestamp::now();
                debug!("Using current time {now}");
                Ok(now)
            }
        }
    }

    fn print_line(&self, text: String) -> Result<()> {
        self.renderer.render(&format!("{text}\n"))
    }
}
