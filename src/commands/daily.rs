//! Verb of the day commands
//!
//! `today`, `guess` and `validate`: the operations a player's client calls.

use crate::core::{Feedback, ScoreError, Word, WordError, score};
use crate::daily::{Clock, DailySelection, SelectionError, today};
use crate::pool::{UsageStats, WordRepository};
use crate::wordlists::{AttemptError, Dictionary, WordKind};
use serde::Serialize;
use thiserror::Error;

/// Result of the `today` command
#[derive(Debug, Clone, Serialize)]
pub struct TodayReport {
    pub word: String,
    pub id: u64,
    pub length: usize,
    pub date: String,
    pub stats: UsageStats,
}

/// Fetch the verb of the day, retiring yesterday's word if needed
///
/// # Errors
/// Returns `SelectionError::NoWordsAvailable` when the pool is exhausted.
pub fn run_today<R, C>(repo: &R, clock: &C) -> Result<TodayReport, SelectionError>
where
    R: WordRepository + ?Sized,
    C: Clock + ?Sized,
{
    let selection = today(repo, clock)?;
    let stats = UsageStats::from_entries(&repo.entries()?);
    Ok(report_for(&selection, stats))
}

fn report_for(selection: &DailySelection, stats: UsageStats) -> TodayReport {
    TodayReport {
        word: selection.word.clone(),
        id: selection.id.0,
        length: selection.length(),
        date: selection.date.to_string(),
        stats,
    }
}

#[derive(Debug, Error)]
pub enum GuessError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Score(ScoreError::InvalidWord(e))
    }
}

/// Result of scoring an attempt against the verb of the day
#[derive(Debug, Clone, Serialize)]
pub struct GuessReport {
    pub feedback: Feedback,
    pub victory: bool,
    /// Revealed only on victory
    pub word: Option<String>,
}

/// Score `attempt` against today's verb
///
/// # Errors
/// Returns `GuessError` for a malformed attempt or when no verb is available.
pub fn run_guess<R, C>(repo: &R, clock: &C, attempt: &str) -> Result<GuessReport, GuessError>
where
    R: WordRepository + ?Sized,
    C: Clock + ?Sized,
{
    let guess = Word::new(attempt)?;
    let selection = today(repo, clock)?;
    let secret = Word::new(&selection.word)?;

    let feedback = score(&guess, &secret);
    let victory = feedback.is_win();
    Ok(GuessReport {
        feedback,
        victory,
        word: victory.then_some(selection.word),
    })
}

/// Result of the `validate` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<WordKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// Check whether `text` is an acceptable guess
#[must_use]
pub fn run_validate(dictionary: &Dictionary, text: &str) -> ValidationReport {
    match dictionary.validate_attempt(text) {
        Ok((_, kind)) => ValidationReport {
            valid: true,
            kind: Some(kind),
            message: None,
            code: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            kind: None,
            code: Some(e.code()),
            message: Some(match &e {
                AttemptError::WordNotFound(_) => "word not found".to_string(),
                AttemptError::InvalidWord(inner) => inner.to_string(),
            }),
        },
    }
}
