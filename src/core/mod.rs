//! Core domain types for Verbo
//!
//! Words, letter feedback scoring and hard-mode validation. Everything here is
//! pure: no I/O, no clock, no shared state.

mod feedback;
mod hard_mode;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterVerdict, ScoreError, score, score_str};
pub use hard_mode::{HardModeConstraints, HardModeViolation, validate_hard_mode};
pub use word::{
    VERB_SUFFIXES, WORD_LENGTH, Word, WordError, fold_accent, is_letter, normalize, to_lower,
};
