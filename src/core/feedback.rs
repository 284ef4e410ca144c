//! Letter feedback scoring
//!
//! Scores a guess against the secret word the way Wordle does, including
//! proper handling of duplicate letters:
//! - `correct`: letter in the right position
//! - `wrong-position`: letter in the word, somewhere else
//! - `incorrect`: letter not in the word (or all its copies already matched)

use super::word::{WORD_LENGTH, Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Verdict for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterVerdict {
    Correct,
    WrongPosition,
    Incorrect,
}

impl LetterVerdict {
    /// Emoji tile used in share text and terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Incorrect => '⬜',
        }
    }

    /// Wire name, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::WrongPosition => "wrong-position",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guessed letter (original casing) with its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    pub letter: char,
    #[serde(rename = "status")]
    pub verdict: LetterVerdict,
}

/// Scoring failed before any letter was compared
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} letters but the secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter tally
    /// 2. Second pass, left to right: mark letters still present in the tally
    ///    as wrong-position and consume one copy each
    ///
    /// Comparison is case-insensitive; the returned letters keep the casing
    /// of the guess.
    ///
    /// # Examples
    /// ```
    /// use verbo::core::{Feedback, LetterVerdict, Word};
    ///
    /// let guess = Word::new("FICAR").unwrap();
    /// let secret = Word::new("ferir").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.letters()[0].letter, 'F');
    /// assert_eq!(feedback.letters()[0].verdict, LetterVerdict::Correct);
    /// assert_eq!(feedback.letters()[1].verdict, LetterVerdict::WrongPosition);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Incorrect; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        for (i, verdict) in verdicts.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *verdict = LetterVerdict::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present but misplaced, limited by what is left
        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if *verdict != LetterVerdict::Incorrect {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *verdict = LetterVerdict::WrongPosition;
                *count -= 1;
            }
        }

        Self::from_parts(guess, verdicts)
    }

    /// Build feedback from a guess and known verdicts
    #[must_use]
    pub fn from_parts(guess: &Word, verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        let display = guess.display_letters();
        Self(std::array::from_fn(|i| LetterFeedback {
            letter: display[i],
            verdict: verdicts[i],
        }))
    }

    /// Parse verdicts from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for wrong-position
    /// - '-'/'_'/'X'/'x'/⬜ for incorrect
    #[cfg(test)]
    #[must_use]
    pub fn from_pattern(guess: &Word, pattern: &str) -> Option<Self> {
        let chars: Vec<char> = pattern.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut verdicts = [LetterVerdict::Incorrect; WORD_LENGTH];
        for (verdict, ch) in verdicts.iter_mut().zip(chars) {
            *verdict = match ch {
                'G' | 'g' | '🟩' => LetterVerdict::Correct,
                'Y' | 'y' | '🟨' => LetterVerdict::WrongPosition,
                '-' | '_' | 'X' | 'x' | '⬜' => LetterVerdict::Incorrect,
                _ => return None,
            };
        }

        Some(Self::from_parts(guess, verdicts))
    }

    /// Per-position letters and verdicts
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Just the verdicts
    #[must_use]
    pub fn verdicts(&self) -> [LetterVerdict; WORD_LENGTH] {
        std::array::from_fn(|i| self.0[i].verdict)
    }

    /// The guessed word as entered
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|l| l.letter).collect()
    }

    /// All letters correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|l| l.verdict == LetterVerdict::Correct)
    }

    /// Number of positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|l| l.verdict == verdict).count()
    }

    /// Emoji row, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|l| l.verdict.emoji()).collect()
    }
}

/// Score a guess against the secret word
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> Feedback {
    Feedback::calculate(guess, secret)
}

/// Score raw strings, validating them first
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` when the two inputs have a different
/// number of letters, or `ScoreError::InvalidWord` when either one is not a
/// valid 5-letter word.
pub fn score_str(guess: &str, secret: &str) -> Result<Feedback, ScoreError> {
    let guess_len = guess.trim().chars().count();
    let secret_len = secret.trim().chars().count();
    if guess_len != secret_len {
        return Err(ScoreError::LengthMismatch {
            guess: guess_len,
            secret: secret_len,
        });
    }

    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(Feedback::calculate(&guess, &secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Correct, Incorrect, WrongPosition};

    fn verdicts(guess: &str, secret: &str) -> [LetterVerdict; WORD_LENGTH] {
        score_str(guess, secret).unwrap().verdicts()
    }

    #[test]
    fn identical_words_are_all_correct() {
        let feedback = score_str("comer", "comer").unwrap();
        assert!(feedback.is_win());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn ferir_against_ficar() {
        assert_eq!(
            verdicts("ficar", "ferir"),
            [Correct, WrongPosition, Incorrect, Incorrect, Correct]
        );
    }

    #[test]
    fn duplicate_letters_never_exceed_secret_count() {
        // CARRO has two Rs; RORRO offers three
        let feedback = score_str("rorro", "carro").unwrap();
        assert_eq!(
            feedback.verdicts(),
            [Incorrect, Incorrect, Correct, Correct, Correct]
        );

        let r_hits = feedback
            .letters()
            .iter()
            .filter(|l| l.letter == 'r' && l.verdict != Incorrect)
            .count();
        assert_eq!(r_hits, 2);
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_duplicate() {
        // FALAR has two As, both matched exactly; the leading A gets nothing
        assert_eq!(
            verdicts("aaaaa", "falar"),
            [Incorrect, Correct, Incorrect, Correct, Incorrect]
        );
        assert_eq!(
            verdicts("arara", "andar"),
            [Correct, WrongPosition, WrongPosition, Incorrect, Incorrect]
        );
    }

    #[test]
    fn second_pass_is_left_to_right() {
        // COMER has a single E: the first misplaced E takes it
        assert_eq!(
            verdicts("eerie", "comer"),
            [WrongPosition, Incorrect, WrongPosition, Incorrect, Incorrect]
        );
    }

    #[test]
    fn all_incorrect() {
        let feedback = score_str("bbbbb", "comer").unwrap();
        assert_eq!(feedback.count(Incorrect), 5);
        assert!(!feedback.is_win());
    }

    #[test]
    fn comparison_ignores_case_but_keeps_display() {
        let feedback = score_str("CoMeR", "comer").unwrap();
        assert!(feedback.is_win());
        assert_eq!(feedback.word(), "CoMeR");
        assert_eq!(feedback.letters()[0].letter, 'C');
    }

    #[test]
    fn accents_are_significant_when_scoring() {
        let feedback = score_str("comêr", "comer").unwrap();
        assert_eq!(feedback.letters()[3].verdict, Incorrect);
        assert_eq!(feedback.letters()[3].letter, 'ê');
    }

    #[test]
    fn length_mismatch_is_rejected_before_scoring() {
        assert_eq!(
            score_str("correr", "comer"),
            Err(ScoreError::LengthMismatch {
                guess: 6,
                secret: 5
            })
        );
    }

    #[test]
    fn invalid_word_is_rejected() {
        assert!(matches!(
            score_str("c0mer", "comer"),
            Err(ScoreError::InvalidWord(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn from_pattern_round_trips_emoji() {
        let guess = Word::new("ficar").unwrap();
        let p1 = Feedback::from_pattern(&guess, "GY--G").unwrap();
        let p2 = Feedback::from_pattern(&guess, "🟩🟨⬜⬜🟩").unwrap();
        let p3 = Feedback::from_pattern(&guess, "gyxxg").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_emoji(), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn from_pattern_invalid() {
        let guess = Word::new("ficar").unwrap();
        assert!(Feedback::from_pattern(&guess, "GYG").is_none());
        assert!(Feedback::from_pattern(&guess, "GYGGYG").is_none());
        assert!(Feedback::from_pattern(&guess, "GYZGY").is_none());
    }

    #[test]
    fn serializes_like_the_api() {
        let feedback = score_str("ficar", "ferir").unwrap();
        let json = serde_json::to_value(feedback).unwrap();
        assert_eq!(json[0]["letter"], "f");
        assert_eq!(json[0]["status"], "correct");
        assert_eq!(json[1]["status"], "wrong-position");
        assert_eq!(json[2]["status"], "incorrect");
    }
}
