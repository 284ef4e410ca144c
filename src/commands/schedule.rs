//! Schedule preview
//!
//! Shows which word the current pool gives for today and the days before
//! it. Nothing is marked.

use crate::daily::{Clock, ScheduleEntry, schedule};
use crate::pool::{StoreError, UsageStats, WordRepository};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    pub today: NaiveDate,
    pub last_advanced: Option<NaiveDate>,
    pub entries: Vec<ScheduleEntry>,
    pub stats: UsageStats,
}

/// Build the preview for the last `days` days
///
/// # Errors
/// Returns `StoreError` if the pool cannot be read.
pub fn run_schedule<R, C>(repo: &R, clock: &C, days: u32) -> Result<ScheduleReport, StoreError>
where
    R: WordRepository + ?Sized,
    C: Clock + ?Sized,
{
    let today = clock.today();
    Ok(ScheduleReport {
        today,
        last_advanced: repo.last_advanced()?,
        entries: schedule(repo, today, days)?,
        stats: UsageStats::from_entries(&repo.entries()?),
    })
}
