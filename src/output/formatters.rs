//! Formatting utilities for the match report

/// Format one match as `"<count>: <word>"`, `count` starting at 1
#[must_use]
pub fn format_match(count: usize, word: &str) -> String {
    format!("{count}: {word}")
}

/// Format the closing total line
#[must_use]
pub fn format_total(count: usize) -> String {
    format!("Matches: {count}")
}

/// Render a whole report, one line per entry
#[must_use]
pub fn report_lines(matches: &[String]) -> Vec<String> {
    matches
        .iter()
        .enumerate()
        .map(|(i, word)| format_match(i + 1, word))
        .chain(std::iter::once(format_total(matches.len())))
        .collect()
}
