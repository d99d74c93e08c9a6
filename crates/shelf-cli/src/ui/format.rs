//! String formatting utilities for UI rendering.

use super::theme::{READ_MARK, UNREAD_MARK};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Format a percentage with two decimals (e.g. "25.00%").
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Read-status marker for table cells.
pub fn read_marker(read: bool, unicode: bool) -> &'static str {
    if read {
        READ_MARK.get(unicode)
    } else {
        UNREAD_MARK.get(unicode)
    }
}

/// Placeholder for an empty genre.
pub fn genre_or_dash(genre: &str) -> String {
    if genre.trim().is_empty() {
        "-".to_string()
    } else {
        single_line(genre)
    }
}
