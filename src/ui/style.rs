//! Color helpers for terminal output.
//!
//! Every helper returns plain text when colors are disabled.

use owo_colors::{OwoColorize, Style as Paint};
use std::fmt::Display;

use crate::output;

fn paint<T: Display>(text: T, style: Paint) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        text.style(style).to_string()
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Supported languages")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, Paint::new().bold())
    }

    /// Player names and engine names
    pub fn value<T: Display>(text: T) -> String {
        paint(text, Paint::new().cyan().bold())
    }

    /// Supplementary info (translation origin, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, Paint::new().red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    /// Language codes and engine ids
    pub fn code<T: Display>(text: T) -> String {
        paint(text, Paint::new().yellow())
    }

    pub fn hint<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed().italic())
    }

    pub fn default_marker() -> String {
        paint("(default)", Paint::new().dimmed())
    }
}
