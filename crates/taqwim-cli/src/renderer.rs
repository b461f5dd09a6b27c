//! Terminal output for rendered dates and calendar reports.
//!
//! Single-line results and the `show` report both pass through here. With
//! color on, report headings take the skin's header style and `**labels**`
//! are styled inline by termimad; with color off the text is printed exactly
//! as the formatter produced it, which is what scripts and tests compare.

use std::fmt::Write as _;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints formatter output either styled or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        print!("{}", self.to_output(markdown));
        Ok(())
    }

    /// The exact text [`render`](Self::render) writes for `markdown`.
    pub fn to_output(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            match heading(line).filter(|(level, _)| *level <= self.skin.headers.len()) {
                Some((level, title)) => {
                    let style = &self.skin.headers[level - 1].compound_style;
                    let _ = writeln!(out, "{}", style.apply_to(title));
                }
                None => {
                    let _ = writeln!(out, "{}", self.skin.inline(line));
                }
            }
        }
        out
    }
}

/// Splits `## Title` into its level and title.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }
    Some((level, line[level..].trim_start()))
}
