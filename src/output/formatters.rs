//! Formatting utilities for terminal output

/// Format a word's score as a circled number
///
/// Scores above twenty fall back to parentheses.
#[must_use]
pub fn score_badge(points: usize) -> String {
    match points {
        1..=20 => char::from_u32(0x2460 + points as u32 - 1)
            .map_or_else(|| format!("({points})"), String::from),
        _ => format!("({points})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
