//! Formatting utilities for terminal output

/// Space out a masked word so adjacent blanks stay countable
///
/// # Examples
/// ```
/// use hangman_solver::output::formatters::spaced_mask;
///
/// assert_eq!(spaced_mask("h_ll_"), "h _ l l _");
/// ```
#[must_use]
pub fn spaced_mask(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (idx, c) in masked.chars().enumerate() {
        if idx > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One heart per remaining try, hollow for the ones already lost
#[must_use]
pub fn tries_bar(remaining: u32, max: u32) -> String {
    let remaining = remaining.min(max) as usize;
    let lost = max as usize - remaining;
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(lost))
}
