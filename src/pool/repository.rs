//! Word pool persistence interface
//!
//! The selector never talks to storage directly: it reads entries and issues
//! conditional writes through [`WordRepository`]. Both provided
//! implementations share [`PoolState`] for the actual bookkeeping.

use super::entry::{WordEntry, WordId};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid JSON: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no word with id {0}")]
    UnknownId(WordId),
}

/// What advancing the pool to a new day did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The previous day's word was retired
    Marked { date: NaiveDate, word: String },
    /// The previous day's word had already been retired
    AlreadyUsed { date: NaiveDate, word: String },
    /// No word could be selected for the previous day
    NothingToMark { date: NaiveDate },
    /// Another call already advanced to this day or later
    AlreadyAdvanced { last: NaiveDate },
}

impl AdvanceOutcome {
    /// Whether the pool state changed
    #[must_use]
    pub const fn advanced(&self) -> bool {
        !matches!(self, Self::AlreadyAdvanced { .. })
    }
}

/// Chooses the word served on a date from entries in id order
pub type DayPicker<'a> = &'a dyn Fn(NaiveDate, &[WordEntry]) -> Option<WordId>;

/// Persistence collaborator for the daily word pool
///
/// Implementations synchronize internally so that `mark_used` and
/// `advance_to` behave as atomic conditional updates.
pub trait WordRepository {
    /// All entries, in ascending id order
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn entries(&self) -> Result<Vec<WordEntry>, StoreError>;

    /// Add a new active, unused word; `None` if it already exists
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be updated.
    fn insert(&self, word: &str) -> Result<Option<WordId>, StoreError>;

    /// Enable or disable an entry; returns whether anything changed
    ///
    /// # Errors
    /// Returns `StoreError::UnknownId` for a missing id.
    fn set_active(&self, id: WordId, active: bool) -> Result<bool, StoreError>;

    /// Flip `used` to true; returns false if it was already set
    ///
    /// # Errors
    /// Returns `StoreError::UnknownId` for a missing id.
    fn mark_used(&self, id: WordId) -> Result<bool, StoreError>;

    /// Clear `used` on every active entry; returns how many were cleared
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be updated.
    fn reset_all(&self) -> Result<usize, StoreError>;

    /// Move the pool to `date` as one atomic step
    ///
    /// If the last advanced day is absent or earlier than `date`, retire the
    /// word `pick` chooses for that day (yesterday when absent) and record
    /// `date`. Both changes are stored together or not at all; callers that
    /// lose the race observe the pool after the retirement.
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be updated; nothing
    /// is recorded in that case.
    fn advance_to(&self, date: NaiveDate, pick: DayPicker<'_>)
    -> Result<AdvanceOutcome, StoreError>;

    /// The last day recorded by `advance_to`
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn last_advanced(&self) -> Result<Option<NaiveDate>, StoreError>;
}

/// Whole pool state, as persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub next_id: u64,
    pub last_advanced: Option<NaiveDate>,
    pub entries: Vec<WordEntry>,
}

impl PoolState {
    /// Entries sorted by id
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<WordEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|e| e.id);
        entries
    }

    pub fn insert(&mut self, word: &str) -> Option<WordId> {
        let word = word.trim().to_lowercase();
        if self.entries.iter().any(|e| e.word == word) {
            return None;
        }

        self.next_id = self
            .next_id
            .max(self.entries.iter().map(|e| e.id.0).max().unwrap_or(0))
            + 1;
        let id = WordId(self.next_id);
        self.entries.push(WordEntry::new(id, word));
        Some(id)
    }

    /// # Errors
    /// Returns `StoreError::UnknownId` for a missing id.
    pub fn set_active(&mut self, id: WordId, active: bool) -> Result<bool, StoreError> {
        let entry = self.entry_mut(id)?;
        let changed = entry.active != active;
        entry.active = active;
        Ok(changed)
    }

    /// # Errors
    /// Returns `StoreError::UnknownId` for a missing id.
    pub fn mark_used(&mut self, id: WordId) -> Result<bool, StoreError> {
        let entry = self.entry_mut(id)?;
        if entry.used {
            return Ok(false);
        }
        entry.used = true;
        Ok(true)
    }

    pub fn reset_all(&mut self) -> usize {
        let mut cleared = 0;
        for entry in self.entries.iter_mut().filter(|e| e.active && e.used) {
            entry.used = false;
            cleared += 1;
        }
        cleared
    }

    /// Claim `date`, then retire the word of the previously served day
    ///
    /// # Errors
    /// Returns `StoreError::UnknownId` if `pick` names a missing entry; the
    /// state is left untouched.
    pub fn advance_to(
        &mut self,
        date: NaiveDate,
        pick: DayPicker<'_>,
    ) -> Result<AdvanceOutcome, StoreError> {
        let previous = match self.last_advanced {
            Some(last) if last >= date => {
                debug!("already advanced to {last}");
                return Ok(AdvanceOutcome::AlreadyAdvanced { last });
            }
            Some(last) => last,
            None => date.pred_opt().unwrap_or(date),
        };

        let outcome = match pick(previous, &self.sorted_entries()) {
            Some(id) => {
                let word = self.entry_mut(id)?.word.clone();
                if self.mark_used(id)? {
                    info!("retired {word} (word of {previous})");
                    AdvanceOutcome::Marked {
                        date: previous,
                        word,
                    }
                } else {
                    AdvanceOutcome::AlreadyUsed {
                        date: previous,
                        word,
                    }
                }
            }
            None => {
                warn!("no word available for {previous}, nothing to retire");
                AdvanceOutcome::NothingToMark { date: previous }
            }
        };

        self.last_advanced = Some(date);
        Ok(outcome)
    }

    fn entry_mut(&mut self, id: WordId) -> Result<&mut WordEntry, StoreError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::UnknownId(id))
    }
}
