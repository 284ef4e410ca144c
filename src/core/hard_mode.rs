//! Hard mode guess validation
//!
//! In hard mode every hint already revealed must be reused: letters marked
//! correct stay in place, letters marked wrong-position appear somewhere.

use super::feedback::{Feedback, LetterVerdict};
use super::word::{Word, to_lower};
use std::collections::BTreeMap;
use thiserror::Error;

/// The first hint a candidate guess fails to honor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// A letter revealed as correct is missing from its position (0-based)
    #[error("letter {} must be \"{}\"", .position + 1, .letter.to_uppercase())]
    PositionMismatch { position: usize, letter: char },
    /// A letter revealed as present is missing from the guess
    #[error("guess must include the letter \"{}\"", .letter.to_uppercase())]
    MissingLetter { letter: char },
}

/// Constraints derived from a guess history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    positions: BTreeMap<usize, char>,
    required: Vec<char>,
}

impl HardModeConstraints {
    /// Collect the constraints revealed by `history`
    ///
    /// Positional constraints come from every correct verdict. Inclusion
    /// constraints come from wrong-position verdicts, in first-revealed order,
    /// minus letters a later guess revealed as correct.
    #[must_use]
    pub fn from_history(history: &[Feedback]) -> Self {
        let mut positions = BTreeMap::new();
        // (letter, index of the guess that first revealed it)
        let mut revealed: Vec<(char, usize)> = Vec::new();

        for (turn, feedback) in history.iter().enumerate() {
            for (position, entry) in feedback.letters().iter().enumerate() {
                let letter = to_lower(entry.letter);
                match entry.verdict {
                    LetterVerdict::Correct => {
                        positions.entry(position).or_insert(letter);
                    }
                    LetterVerdict::WrongPosition => {
                        if !revealed.iter().any(|&(l, _)| l == letter) {
                            revealed.push((letter, turn));
                        }
                    }
                    LetterVerdict::Incorrect => {}
                }
            }
        }

        let required = revealed
            .into_iter()
            .filter(|&(letter, turn)| !upgraded_after(history, letter, turn))
            .map(|(letter, _)| letter)
            .collect();

        Self {
            positions,
            required,
        }
    }

    /// Check a candidate guess, reporting the first violation
    ///
    /// Positions are checked in ascending order before inclusion letters.
    ///
    /// # Errors
    /// Returns the first `HardModeViolation` found.
    pub fn check(&self, candidate: &Word) -> Result<(), HardModeViolation> {
        for (&position, &letter) in &self.positions {
            if candidate.char_at(position) != letter {
                return Err(HardModeViolation::PositionMismatch { position, letter });
            }
        }

        for &letter in &self.required {
            if !candidate.has_letter(letter) {
                return Err(HardModeViolation::MissingLetter { letter });
            }
        }

        Ok(())
    }

    /// Position → letter requirements, ascending by position
    #[must_use]
    pub const fn positions(&self) -> &BTreeMap<usize, char> {
        &self.positions
    }

    /// Letters that must appear somewhere, in first-revealed order
    #[must_use]
    pub fn required(&self) -> &[char] {
        &self.required
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.required.is_empty()
    }
}

fn upgraded_after(history: &[Feedback], letter: char, turn: usize) -> bool {
    history.iter().skip(turn + 1).any(|feedback| {
        feedback
            .letters()
            .iter()
            .any(|l| l.verdict == LetterVerdict::Correct && to_lower(l.letter) == letter)
    })
}

/// Validate a candidate guess against every hint revealed so far
///
/// # Errors
/// Returns the first `HardModeViolation`; an empty history never fails.
///
/// # Examples
/// ```
/// use verbo::core::{Feedback, HardModeViolation, Word, validate_hard_mode};
///
/// let secret = Word::new("ferir").unwrap();
/// let first = Feedback::calculate(&Word::new("ficar").unwrap(), &secret);
///
/// let err = validate_hard_mode(&Word::new("comer").unwrap(), &[first]).unwrap_err();
/// assert_eq!(err, HardModeViolation::PositionMismatch { position: 0, letter: 'f' });
/// assert_eq!(err.to_string(), "letter 1 must be \"F\"");
/// ```
pub fn validate_hard_mode(candidate: &Word, history: &[Feedback]) -> Result<(), HardModeViolation> {
    if history.is_empty() {
        return Ok(());
    }
    HardModeConstraints::from_history(history).check(candidate)
}
