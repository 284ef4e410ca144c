//! Word pool persisted as a JSON document
//!
//! Every operation reads the file, applies the change and writes it back
//! through a temporary file and a rename. A missing file is an empty pool.

use super::entry::{WordEntry, WordId};
use super::repository::{AdvanceOutcome, DayPicker, PoolState, StoreError, WordRepository};
use chrono::NaiveDate;
use log::debug;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed word pool
///
/// The lock serializes read-modify-write cycles within one process.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<PoolState, StoreError> {
        read_json(&self.path)
    }

    fn save(&self, state: &PoolState) -> Result<(), StoreError> {
        write_json(&self.path, state)?;
        debug!("saved word pool to {}", self.path.display());
        Ok(())
    }

    /// Run `f` against the loaded state; persist only when it reports a change
    fn update<T>(
        &self,
        f: impl FnOnce(&mut PoolState) -> Result<(T, bool), StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.lock.lock();
        let mut state = self.load()?;
        let (result, changed) = f(&mut state)?;
        if changed {
            self.save(&state)?;
        }
        Ok(result)
    }
}

/// Read a JSON document; a missing file gives `T::default()`
pub(crate) fn read_json<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(source) => Err(io_error(path, source)),
    }
}

/// Write a JSON document through a temporary file and a rename
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| io_error(path, e))?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| io_error(path, e))?;
    fs::rename(&tmp, path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl WordRepository for JsonFileRepository {
    fn entries(&self) -> Result<Vec<WordEntry>, StoreError> {
        let _guard = self.lock.lock();
        Ok(self.load()?.sorted_entries())
    }

    fn insert(&self, word: &str) -> Result<Option<WordId>, StoreError> {
        self.update(|state| {
            let id = state.insert(word);
            Ok((id, id.is_some()))
        })
    }

    fn set_active(&self, id: WordId, active: bool) -> Result<bool, StoreError> {
        self.update(|state| {
            let changed = state.set_active(id, active)?;
            Ok((changed, changed))
        })
    }

    fn mark_used(&self, id: WordId) -> Result<bool, StoreError> {
        self.update(|state| {
            let changed = state.mark_used(id)?;
            Ok((changed, changed))
        })
    }

    fn reset_all(&self) -> Result<usize, StoreError> {
        self.update(|state| {
            let cleared = state.reset_all();
            Ok((cleared, cleared > 0))
        })
    }

    fn advance_to(
        &self,
        date: NaiveDate,
        pick: DayPicker<'_>,
    ) -> Result<AdvanceOutcome, StoreError> {
        self.update(|state| {
            let outcome = state.advance_to(date, pick)?;
            let changed = outcome.advanced();
            Ok((outcome, changed))
        })
    }

    fn last_advanced(&self) -> Result<Option<NaiveDate>, StoreError> {
        let _guard = self.lock.lock();
        Ok(self.load()?.last_advanced)
    }
}
