//! Formatting utilities for CLI output.

use crate::services::mpris::format_minutes;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a track length as `{m}m{s}s ({total})`
///
/// # Examples
///
/// ```
/// use spotctl::cli::formatting::format_length;
///
/// assert_eq!(format_length(282), "4m42s (282)");
/// ```
pub fn format_length(total_secs: u64) -> String {
    format!("{} ({total_secs})", format_minutes(total_secs))
}

/// Drops the trailing newlines of a property report before printing
pub fn format_report(report: String) -> String {
    report.trim_end_matches('\n').to_string()
}
