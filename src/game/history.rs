//! Record of past daily games

use super::session::{GameSession, GameStatus};
use crate::core::Feedback;
use crate::pool::{StoreError, read_json, write_json};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Days of history kept
pub const HISTORY_LIMIT: usize = 30;

/// One finished daily game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub word: String,
    pub won: bool,
    /// Guesses used, or the attempt limit for a loss
    pub attempts: usize,
    pub guesses: Vec<Feedback>,
    pub hard_mode: bool,
}

impl HistoryEntry {
    #[must_use]
    pub fn from_session(date: NaiveDate, session: &GameSession) -> Self {
        let won = session.status() == GameStatus::Won;
        let options = session.options();
        Self {
            date,
            word: session.secret().lowercase(),
            won,
            attempts: if won {
                session.attempts()
            } else {
                options.max_attempts
            },
            guesses: session.history().to_vec(),
            hard_mode: options.hard_mode,
        }
    }
}

/// Played words, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let mut history: Self = read_json(path)?;
        history.entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(history)
    }

    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        write_json(path, self)
    }

    /// Add `entry`, replacing any entry for the same date
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| e.date != entry.date);
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
        self.entries.truncate(HISTORY_LIMIT);
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Entries from the `days` days up to and including `today`
    #[must_use]
    pub fn recent(&self, today: NaiveDate, days: u32) -> Vec<&HistoryEntry> {
        let cutoff = today
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        self.entries
            .iter()
            .filter(|e| e.date > cutoff && e.date <= today)
            .collect()
    }
}
