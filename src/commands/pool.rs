//! Word pool administration
//!
//! Seeding, imports, resets and activation toggles.

use crate::daily::{AdvanceOutcome, advance_day};
use crate::pool::{
    ImportReport, StoreError, UsageStats, WordEntry, WordId, WordRepository, import_words,
};
use crate::wordlists::VERBS;
use crate::wordlists::loader::load_lines;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use std::path::Path;

/// Usage counters of the pool
///
/// # Errors
/// Returns `StoreError` if the pool cannot be read.
pub fn pool_stats<R: WordRepository + ?Sized>(repo: &R) -> Result<UsageStats, StoreError> {
    Ok(UsageStats::from_entries(&repo.entries()?))
}

/// Import the embedded seed verbs
///
/// # Errors
/// Returns `StoreError` if the pool cannot be updated.
pub fn seed_pool<R: WordRepository + ?Sized>(repo: &R) -> Result<ImportReport, StoreError> {
    import_words(repo, VERBS)
}

/// Import one verb per line from `path`
///
/// # Errors
/// Returns an error if the file cannot be read or the pool cannot be updated.
pub fn import_file<R: WordRepository + ?Sized>(repo: &R, path: &Path) -> Result<ImportReport> {
    let lines =
        load_lines(path).with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(import_words(repo, lines)?)
}

/// Make every active word selectable again
///
/// # Errors
/// Returns `StoreError` if the pool cannot be updated.
pub fn reset_pool<R: WordRepository + ?Sized>(repo: &R) -> Result<usize, StoreError> {
    let cleared = repo.reset_all()?;
    info!("reset {cleared} used words");
    Ok(cleared)
}

/// Run the daily advance for `today` without selecting
///
/// # Errors
/// Returns `StoreError` if the pool cannot be updated.
pub fn advance_pool<R: WordRepository + ?Sized>(
    repo: &R,
    today: NaiveDate,
) -> Result<AdvanceOutcome, StoreError> {
    advance_day(repo, today)
}

/// Entries, optionally only the available ones
///
/// # Errors
/// Returns `StoreError` if the pool cannot be read.
pub fn list_pool<R: WordRepository + ?Sized>(
    repo: &R,
    available_only: bool,
) -> Result<Vec<WordEntry>, StoreError> {
    let mut entries = repo.entries()?;
    if available_only {
        entries.retain(WordEntry::is_available);
    }
    Ok(entries)
}

/// Enable or disable a word
///
/// # Errors
/// Returns `StoreError::UnknownId` for a missing id.
pub fn set_word_active<R: WordRepository + ?Sized>(
    repo: &R,
    id: WordId,
    active: bool,
) -> Result<bool, StoreError> {
    let changed = repo.set_active(id, active)?;
    if changed {
        info!("word #{id} {}", if active { "enabled" } else { "disabled" });
    }
    Ok(changed)
}
