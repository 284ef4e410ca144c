//! In-memory word pool

use super::entry::{WordEntry, WordId};
use super::repository::{AdvanceOutcome, DayPicker, PoolState, StoreError, WordRepository};
use chrono::NaiveDate;
use parking_lot::Mutex;

/// Word pool held in process memory
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: Mutex<PoolState>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from words in order; duplicates are skipped
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = PoolState::default();
        for word in words {
            state.insert(word.as_ref());
        }
        Self {
            state: Mutex::new(state),
        }
    }

    /// Snapshot of the whole state
    #[must_use]
    pub fn snapshot(&self) -> PoolState {
        self.state.lock().clone()
    }
}

impl WordRepository for MemoryRepository {
    fn entries(&self) -> Result<Vec<WordEntry>, StoreError> {
        Ok(self.state.lock().sorted_entries())
    }

    fn insert(&self, word: &str) -> Result<Option<WordId>, StoreError> {
        Ok(self.state.lock().insert(word))
    }

    fn set_active(&self, id: WordId, active: bool) -> Result<bool, StoreError> {
        self.state.lock().set_active(id, active)
    }

    fn mark_used(&self, id: WordId) -> Result<bool, StoreError> {
        self.state.lock().mark_used(id)
    }

    fn reset_all(&self) -> Result<usize, StoreError> {
        Ok(self.state.lock().reset_all())
    }

    fn advance_to(
        &self,
        date: NaiveDate,
        pick: DayPicker<'_>,
    ) -> Result<AdvanceOutcome, StoreError> {
        self.state.lock().advance_to(date, pick)
    }

    fn last_advanced(&self) -> Result<Option<NaiveDate>, StoreError> {
        Ok(self.state.lock().last_advanced)
    }
}
