//! Spoiler-free result summary

use crate::core::Feedback;
use std::fmt::Write;

/// Emoji grid of a finished game
///
/// ```
/// use verbo::core::score_str;
/// use verbo::game::share_text;
///
/// let guesses = [score_str("abrir", "comer").unwrap(), score_str("comer", "comer").unwrap()];
/// let text = share_text(&guesses, true, 6, Some(12));
/// assert_eq!(text, "Verbo #12 2/6\n\n⬜⬜⬜⬜🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(
    guesses: &[Feedback],
    won: bool,
    max_attempts: usize,
    game_number: Option<u32>,
) -> String {
    let mut text = String::from("Verbo");
    if let Some(number) = game_number {
        let _ = write!(text, " #{number}");
    }
    if won {
        let _ = write!(text, " {}/{max_attempts}", guesses.len());
    } else {
        let _ = write!(text, " X/{max_attempts}");
    }

    if !guesses.is_empty() {
        text.push_str("\n\n");
        let rows: Vec<String> = guesses.iter().map(Feedback::to_emoji).collect();
        text.push_str(&rows.join("\n"));
    }
    text
}
