//! Helpers shared by the output formatters

use serde::Serialize;

use bookmatch_core::error::Result;

/// Escape double quotes for records-format string fields
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Records-format header line
pub fn records_header(mode: &str, extra: &str) -> String {
    if extra.is_empty() {
        format!("H bookmatch=1 records=1 mode={}", mode)
    } else {
        format!("H bookmatch=1 records=1 mode={} {}", mode, extra)
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
