//! Low-level formatting helpers for terminal output

use crate::models::Band;

const RESET: &str = "\x1b[0m";

/// ANSI color escape for a band
pub fn band_color(band: Band) -> &'static str {
    match band {
        Band::Nominal => "\x1b[32m",  // green
        Band::Caution => "\x1b[33m",  // orange-ish yellow
        Band::Critical => "\x1b[31m", // red
    }
}

/// Wrap text in the band's color when color output is enabled
pub fn colorize(text: &str, band: Band, color: bool) -> String {
    if color {
        format!("{}{}{}", band_color(band), text, RESET)
    } else {
        text.to_string()
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Progress bar for a fill level in [0, 100]
pub fn format_bar(fill: f64, width: usize) -> String {
    let fill = fill.clamp(0.0, 100.0);
    let filled = ((fill / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(99.5), "99.5%");
        assert_eq!(format_percentage(15.0), "15.0%");
        assert_eq!(format_percentage(-20.0), "-20.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_format_bar_clamps() {
        assert_eq!(format_bar(-30.0, 4), "░░░░");
        assert_eq!(format_bar(250.0, 4), "████");
    }

    #[test]
    fn test_colorize() {
        assert_eq!(colorize("ok", Band::Nominal, false), "ok");
        assert_eq!(colorize("low", Band::Critical, true), "\x1b[31mlow\x1b[0m");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café con leche", 7), "Café...");
    }
}
