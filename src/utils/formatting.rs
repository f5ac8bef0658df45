//! Formatting utilities used for CLI and export outputs.

use ansi_term::Style;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Decimal hours → `H:MM` (e.g. 9.25 → "9:15").
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();

    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

pub fn miles2readable(miles: Option<f64>) -> String {
    match miles {
        Some(m) => format!("{:.1} mi", m),
        None => "--".to_string(),
    }
}

/// Fixed-width bar of `hours` out of a 24h day.
pub fn day_bar(hours: f64, width: usize) -> String {
    let filled = ((hours.max(0.0) / 24.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}
