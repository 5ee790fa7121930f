//! Time, duration and truncation formatters for CLI output.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

/// Format a timestamp with the configured pattern.
///
/// Falls back to RFC 3339 when the pattern cannot be rendered.
pub fn timestamp(dt: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", dt.format(pattern)) {
        Ok(()) => out,
        Err(_) => dt.to_rfc3339(),
    }
}


/// Format minutes as "45min" or "2h 05min".
pub fn minutes(total: u32) -> String {
    if total < 60 {
        format!("{total}min")
    } else {
        format!("{}h {:02}min", total / 60, total % 60)
    }
}

/// Render a percentage as a ten-cell bar: "[#####-----] 50%".
pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100) / 10);
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(10 - filled), percent)
}

/// Truncate a string with unicode ellipsis, respecting char boundaries.
pub fn truncate_ellipsis(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}
