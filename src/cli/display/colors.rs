//! Status, priority, and phase color mapping for CLI output.
//!
//! All coloring respects the `NO_COLOR` env var automatically via the `colored` crate.

use colored::Colorize;

/// Returns a colored string for an intervention status.
///
/// Color scheme:
/// - Green:  DONE
/// - Yellow: IN_PROGRESS, PAUSED (dimmed)
/// - Blue:   PLANNED
/// - Cyan:   AWAITING_PARTS
/// - Red:    FAILED
/// - Dim:    CANCELLED
/// - White:  unknown/default
pub fn colorize_status(status: &str) -> colored::ColoredString {
    match status {
        "DONE" => status.green().bold(),
        "IN_PROGRESS" => status.yellow(),
        "PAUSED" => status.yellow().dimmed(),
        "PLANNED" => status.blue(),
        "AWAITING_PARTS" => status.cyan(),
        "FAILED" => status.red().bold(),
        "CANCELLED" => status.dimmed(),
        _ => status.white(),
    }
}

/// Returns a colored string for work-item priorities.
///
/// Critical = red bold, High = red, Normal = white, Low = dim.
pub fn colorize_priority(priority: &str) -> colored::ColoredString {
    match priority {
        "CRITICAL" => priority.red().bold(),
        "HIGH" => priority.red(),
        "LOW" => priority.dimmed(),
        _ => priority.white(),
    }
}

/// Returns a colored string for workflow phases.
pub fn colorize_phase(phase: &str) -> colored::ColoredString {
    match phase {
        "COMPLETE" => phase.green().bold(),
        "EXECUTION" => phase.yellow(),
        "QUALITY_CONTROL" => phase.magenta(),
        "DIAGNOSTIC" | "PLANNING" => phase.blue(),
        _ => phase.dimmed(),
    }
}

/// Styled label for detail views (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", name.bold(), ":".dimmed())
}

/// Section header with underline.
pub fn section_header(title: &str) -> String {
    format!("\n{}", title.bold().underline())
}
