//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a bucket's size relative to the largest one
#[must_use]
pub fn bucket_bar(size: usize, largest: usize, width: usize) -> String {
    create_progress_bar(size as f64, largest as f64, width)
}

/// Join words for a single display line, eliding past `limit`
#[must_use]
pub fn word_list(words: &[String], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(String::as_str).collect();
    let hidden = words.len().saturating_sub(limit);
    if hidden == 0 {
        shown.join(" ")
    } else {
        format!("{} … (+{hidden})", shown.join(" "))
    }
}
