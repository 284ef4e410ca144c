//! Player statistics across daily games

use super::session::DEFAULT_MAX_ATTEMPTS;
use crate::pool::{StoreError, read_json, write_json};
use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Win/loss record, streaks and guess distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Index `n` counts wins in `n + 1` attempts
    pub guess_distribution: Vec<u32>,
    pub last_played: Option<NaiveDate>,
    pub last_won: Option<NaiveDate>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: vec![0; DEFAULT_MAX_ATTEMPTS],
            last_played: None,
            last_won: None,
        }
    }
}

impl GameStats {
    /// Whether the game for `date` has been recorded already
    #[must_use]
    pub fn has_played(&self, date: NaiveDate) -> bool {
        self.last_played == Some(date)
    }

    /// Record a win on `date` in `attempts` guesses
    ///
    /// Returns false if `date` was already recorded.
    pub fn record_win(&mut self, date: NaiveDate, attempts: usize) -> bool {
        if self.has_played(date) || attempts == 0 {
            return false;
        }

        let continues = self.last_won == Some(date - Duration::days(1));
        self.current_streak = if continues { self.current_streak + 1 } else { 1 };
        self.max_streak = self.max_streak.max(self.current_streak);

        if self.guess_distribution.len() < attempts {
            self.guess_distribution.resize(attempts, 0);
        }
        self.guess_distribution[attempts - 1] += 1;

        self.games_played += 1;
        self.games_won += 1;
        self.last_played = Some(date);
        self.last_won = Some(date);
        true
    }

    /// Record a loss on `date`
    ///
    /// Returns false if `date` was already recorded.
    pub fn record_loss(&mut self, date: NaiveDate) -> bool {
        if self.has_played(date) {
            return false;
        }
        self.games_played += 1;
        self.current_streak = 0;
        self.last_played = Some(date);
        true
    }

    /// Percentage of games won, rounded
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // 0..=100
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let rate = f64::from(self.games_won) * 100.0 / f64::from(self.games_played);
        rate.round() as u32
    }

    /// Mean attempts over won games, to one decimal
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let wins: u32 = self.guess_distribution.iter().sum();
        if wins == 0 {
            return 0.0;
        }
        let total: f64 = self
            .guess_distribution
            .iter()
            .zip(1u32..)
            .map(|(&count, attempts)| f64::from(count) * f64::from(attempts))
            .sum();
        (total / f64::from(wins) * 10.0).round() / 10.0
    }

    /// Load stats from `path`; a missing file gives empty stats
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        read_json(path)
    }

    /// Write stats to `path` through a temporary file
    ///
    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        write_json(path, self)?;
        debug!("saved stats to {}", path.display());
        Ok(())
    }
}
