/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Usage of a daily limit:
/// ≥ 90% → red
/// ≥ 75% → yellow
/// otherwise → green
pub fn color_for_usage(hours: f64, limit: f64) -> &'static str {
    if limit <= 0.0 {
        return RESET;
    }

    let percentage = hours / limit * 100.0;
    if percentage >= 90.0 {
        RED
    } else if percentage >= 75.0 {
        YELLOW
    } else {
        GREEN
    }
}

/// Route source tag: fallback figures stand out.
pub fn color_for_source(source: &str) -> &'static str {
    match source {
        "fallback" => MAGENTA,
        "manual" => CYAN,
        "computed" => BLUE,
        _ => GREY,
    }
}

/// Grey out empty placeholders, leave everything else as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
