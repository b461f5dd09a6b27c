use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taqwim_core::Language;

use crate::cli::{AbsoluteArgs, HijriArgs, RelativeArgs, ShowArgs, TodayArgs, WeekArgs};

/// Bilingual date rendering for the cohort portal
///
/// Taqwim renders timestamps the way the portal displays them: Gregorian or
/// Hijri calendar dates in English or Arabic, in a fixed display timezone,
/// plus "N minutes ago" phrasing. Settings are read from
/// $XDG_CONFIG_HOME/taqwim/config.json when present.
#[derive(Parser)]
#[command(version, about, name = "taqwim")]
pub struct Args {
    /// Path to a JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Display timezone (IANA name), overriding the settings file
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Output language: en or ar
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Use Arabic-Indic digits in Arabic output
    #[arg(long, global = true)]
    pub arabic_digits: bool,

    /// Print a placeholder instead of failing on invalid timestamps
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Taqwim CLI
///
/// Without a command, today's date is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// Render a timestamp as a calendar date
    #[command(alias = "a")]
    Absolute(AbsoluteArgs),
    /// Describe how long ago a timestamp was
    #[command(alias = "r")]
    Relative(RelativeArgs),
    /// Print today's date
    Today(TodayArgs),
    /// Show every rendering of a timestamp
    Show(ShowArgs),
    /// Program week ranges and the current week number
    Week(WeekArgs),
    /// Convert a Gregorian date to the Hijri calendar
    Hijri(HijriArgs),
    /// Write the effective settings to the XDG config file
    InitConfig,
}
