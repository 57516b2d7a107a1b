//! Display functions for command results
//!
//! The match report goes to stdout as plain text; the banner and
//! diagnostics go to stderr.

use std::fmt;

use super::formatters::report_lines;
use crate::commands::SearchResult;
use colored::Colorize;

/// Print the greeting shown at startup
pub fn print_banner() {
    eprintln!("{}", "Crossword Helper".bright_cyan().bold());
}

/// Print every match with its running count, then the total
pub fn print_search_result(result: &SearchResult) {
    tracing::debug!(
        mode = result.mode.flag(),
        scanned = result.dictionary_size,
        matches = result.count(),
        "printing report"
    );

    for line in report_lines(&result.matches) {
        println!("{line}");
    }
}

/// Print a diagnostic, headline highlighted
///
/// The first line names the problem; any following lines are hints.
pub fn print_diagnostic(error: &impl fmt::Display) {
    let message = error.to_string();
    let (headline, hint) = message.split_once('\n').unwrap_or((message.as_str(), ""));

    eprintln!("{}", headline.red().bold());
    if !hint.is_empty() {
        eprintln!("{hint}");
    }
}
