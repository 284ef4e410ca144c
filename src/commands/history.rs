//! Played-words history

use crate::game::{History, HistoryEntry};
use crate::pool::StoreError;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub today: NaiveDate,
    pub entries: Vec<HistoryEntry>,
    pub won: usize,
}

/// Games from the history file, newest first
///
/// With `days`, only games of the last `days` days up to `today` are listed.
///
/// # Errors
/// Returns `StoreError` if the history file cannot be read.
pub fn run_history(
    path: &Path,
    today: NaiveDate,
    days: Option<u32>,
) -> Result<HistoryReport, StoreError> {
    let history = History::load(path)?;
    let entries: Vec<HistoryEntry> = match days {
        Some(days) => history.recent(today, days).into_iter().cloned().collect(),
        None => history.entries().to_vec(),
    };
    let won = entries.iter().filter(|e| e.won).count();

    Ok(HistoryReport {
        today,
        entries,
        won,
    })
}
