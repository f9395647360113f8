use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

const PROGRESS_WIDTH: usize = 24;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Detail,
    Label,
}

pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            prefs: current_preferences(),
        }
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, format!("=== {} ===", title))
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn detail_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Detail, message.to_string())
    }

    pub fn print_detail(&self, message: impl fmt::Display) {
        println!("{}", self.detail_text(message));
    }

    fn plain(&self) -> bool {
        self.prefs.plain_mode || self.prefs.screen_reader_mode
    }

    fn apply_style(&self, style: Style, text: String) -> String {
        if self.plain() {
            return text;
        }
        match style {
            Style::Header => text.bold().to_string(),
            Style::Detail => text.dimmed().to_string(),
            Style::Label => text.cyan().to_string(),
        }
    }

    pub fn navigation_hint(&self) -> String {
        "(Use arrow keys to navigate, Enter to select, ESC to go back)".to_string()
    }

    /// `Step 3 of 8 (38% Complete)` followed by a bar unless output is plain.
    pub fn progress_line(&self, label: &str, percent: u8) -> String {
        if self.plain() {
            return label.to_string();
        }
        let filled = PROGRESS_WIDTH * usize::from(percent.min(100)) / 100;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(PROGRESS_WIDTH - filled)
        );
        format!("{}  {}", label, bar.green())
    }

    pub fn format_two_column_row(&self, label: &str, description: &str, width: usize) -> String {
        format!("  {:<width$}  {}", label, description, width = width + 2)
    }

    /// Prints `label: value` rows with the labels aligned. Blank values are
    /// shown as `-`.
    pub fn print_key_values(&self, entries: &[(String, String)]) {
        let width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in entries {
            let padded = format!("{:<width$}", format!("{label}:"), width = width + 1);
            let value = if value.trim().is_empty() { "-" } else { value };
            println!("  {} {}", self.apply_style(Style::Label, padded), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Formatter {
        Formatter {
            prefs: OutputPreferences {
                plain_mode: true,
                screen_reader_mode: false,
            },
        }
    }

    #[test]
    fn plain_progress_is_label_only() {
        assert_eq!(
            plain().progress_line("Step 1 of 8 (13% Complete)", 13),
            "Step 1 of 8 (13% Complete)"
        );
    }

    #[test]
    fn rows_pad_labels() {
        assert_eq!(
            plain().format_two_column_row("Next", "Go on", 6),
            "  Next      Go on"
        );
    }
}
