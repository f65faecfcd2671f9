//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Format a pattern as emoji squares
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .feedbacks()
        .iter()
        .map(|fb| match fb {
            Feedback::Exact => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        })
        .collect()
}

/// "CRANE  ⬛⬛🟩⬛🟩"
#[must_use]
pub fn feedback_line(guess: &Word, pattern: Pattern) -> String {
    format!(
        "{}  {}",
        guess.text().to_uppercase(),
        pattern_to_emoji(pattern)
    )
}

/// Guess letters colored by their feedback
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(pattern.feedbacks())
        .map(|(letter, fb)| {
            let cell = format!(" {letter} ");
            match fb {
                Feedback::Exact => cell.black().on_green().to_string(),
                Feedback::Present => cell.black().on_yellow().to_string(),
                Feedback::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a text bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the most a guess could reveal for `total` candidates
#[must_use]
pub fn entropy_bar(entropy: f64, total: usize, width: usize) -> String {
    create_progress_bar(entropy, (total as f64).log2(), width)
}
