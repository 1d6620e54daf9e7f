//! Terminal rendering for icsify types.
//!
//! Extension trait that adds colored output to icsify-core types using
//! owo_colors.

use icsify_core::{EventRecord, ResolvedInterval};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

const DATETIME_FORMAT: &str = "%a %b %-d %Y, %H:%M";

impl Render for ResolvedInterval {
    fn render(&self) -> String {
        let start = self.start.format(DATETIME_FORMAT);
        let end = if self.end.date() == self.start.date() {
            self.end.format("%H:%M").to_string()
        } else {
            self.end.format(DATETIME_FORMAT).to_string()
        };

        let text = format!("{} → {}", start, end);
        if self.is_inverted() {
            format!("{} {}", text, "(ends before it starts)".yellow())
        } else {
            text
        }
    }
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let when = match self.interval() {
            Ok(interval) => interval.render().dimmed().to_string(),
            Err(e) => e.to_string().red().to_string(),
        };

        let mut line = format!("📅 {} {}", self.title.bold(), when);
        if let Some(location) = self.location() {
            line.push(' ');
            line.push_str(&format!("@ {}", location).dimmed().to_string());
        }
        line
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
