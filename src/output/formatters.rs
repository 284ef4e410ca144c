//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterVerdict};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. ` C ` on green
#[must_use]
pub fn letter_tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::WrongPosition => text.black().on_yellow().bold(),
        LetterVerdict::Incorrect => text.white().on_bright_black(),
    }
}

/// A whole guess as colored tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|l| letter_tile(l.letter, l.verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
