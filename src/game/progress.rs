//! Saved state of the daily game in progress

use super::session::{GameError, GameSession, SessionOptions};
use crate::core::Word;
use crate::pool::{StoreError, read_json, write_json};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Guesses made so far on one day, enough to rebuild the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub date: NaiveDate,
    pub word: String,
    pub guesses: Vec<String>,
    pub hard_mode: bool,
    pub max_attempts: usize,
}

impl SavedGame {
    #[must_use]
    pub fn capture(date: NaiveDate, session: &GameSession) -> Self {
        let options = session.options();
        Self {
            date,
            word: session.secret().lowercase(),
            guesses: session.guesses(),
            hard_mode: options.hard_mode,
            max_attempts: options.max_attempts,
        }
    }

    /// The saved game for `date` and `word`, if the file holds one
    ///
    /// A game saved for another day or another word is ignored.
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path, date: NaiveDate, word: &str) -> Result<Option<Self>, StoreError> {
        let saved: Option<Self> = read_json(path)?;
        Ok(saved.filter(|game| {
            let matches = game.date == date && game.word.eq_ignore_ascii_case(word);
            if !matches {
                debug!("ignoring saved game of {} in {}", game.date, path.display());
            }
            matches
        }))
    }

    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        write_json(path, self)
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        SessionOptions {
            max_attempts: self.max_attempts,
            hard_mode: self.hard_mode,
        }
    }

    /// Replay the saved guesses
    ///
    /// # Errors
    /// Returns `GameError` if the word or a guess no longer applies.
    pub fn session(&self) -> Result<GameSession, GameError> {
        GameSession::resume(Word::new(&self.word)?, self.options(), &self.guesses)
    }
}
