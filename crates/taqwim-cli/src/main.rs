//! Taqwim CLI Application
//!
//! Command-line interface for bilingual Gregorian/Hijri date rendering.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, TodayArgs};
use log::info;
use renderer::TerminalRenderer;
use taqwim_core::{Numerals, Settings};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        time_zone,
        lang,
        arabic_digits,
        lenient,
        no_color,
        command,
    } = Args::parse();

    let mut settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    if let Some(time_zone) = time_zone {
        settings.time_zone = time_zone;
    }
    if let Some(lang) = lang {
        settings.language = lang;
    }
    if arabic_digits {
        settings.numerals = Numerals::ArabicIndic;
    }

    let formatter = settings
        .formatter()
        .context("Failed to initialize formatter")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!(
        "Taqwim started (time zone {}, language {})",
        settings.time_zone, settings.language
    );

    let cli = Cli::new(formatter, settings, renderer, lenient);
    match command {
        Some(Absolute(args)) => cli.absolute(args),
        Some(Relative(args)) => cli.relative(args),
        Some(Today(args)) => cli.today(args),
        Some(Show(args)) => cli.show(args),
        Some(Week(args)) => cli.week(args),
        Some(Hijri(args)) => cli.hijri(args),
        Some(InitConfig) => cli.init_config(),
        None => cli.today(TodayArgs {
            hijri: false,
            now: None,
        }),
    }
}
