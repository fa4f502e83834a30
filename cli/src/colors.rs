use colored::{Color, ColoredString, Colorize};

use crate::utils::format_number;

/// What a piece of terminal output represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Airport,
    Distance,
    Success,
    Error,
    StepNumber,
    Number,
    Stats,
}

impl Style {
    fn color(self) -> Color {
        match self {
            Style::Airport => Color::Yellow,
            Style::Distance => Color::Cyan,
            Style::Success | Style::Number => Color::Green,
            Style::Error => Color::Red,
            Style::StepNumber | Style::Stats => Color::Blue,
        }
    }
}

/// Colors terminal output by [`Style`], or leaves it plain when disabled.
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self {
            enabled: use_colors,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: Style) -> ColoredString {
        if self.enabled {
            text.color(style.color())
        } else {
            text.normal()
        }
    }

    pub fn airport_name(&self, text: &str) -> ColoredString {
        self.paint(text, Style::Airport)
    }

    /// Airport name in double quotes, e.g. `"New York"`.
    pub fn quoted_airport(&self, airport: &str) -> ColoredString {
        self.paint(&format!("\"{}\"", airport), Style::Airport)
    }

    /// Distance of a single flight, e.g. `(+1,250 km)`.
    pub fn leg_distance(&self, distance: u64) -> ColoredString {
        self.paint(&format!("(+{} km)", format_number(distance)), Style::Distance)
    }

    pub fn success(&self, text: &str) -> ColoredString {
        self.paint(text, Style::Success)
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.paint(text, Style::Error)
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        self.paint(text, Style::StepNumber)
    }

    pub fn number(&self, text: &str) -> ColoredString {
        self.paint(text, Style::Number)
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        self.paint(text, Style::Stats)
    }
}
