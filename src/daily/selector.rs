//! Daily word selection
//!
//! The word of a day is a pure function of the date and the pool: hash the
//! ISO date string, then index into the available entries in id order.
//! Retiring words happens separately in [`advance_day`].

use super::calendar::Clock;
use crate::core::WordError;
use crate::pool::{AdvanceOutcome, StoreError, UsageStats, WordEntry, WordId, WordRepository};
use chrono::{Duration, NaiveDate};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

/// Selection could not produce a word
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("all words used, admin reset required ({} of {} used)", .stats.used, .stats.total)]
    NoWordsAvailable { stats: UsageStats },
    #[error("pool word #{id} \"{word}\" cannot be played: {source}")]
    Unplayable {
        id: WordId,
        word: String,
        #[source]
        source: WordError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The word chosen for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySelection {
    pub date: NaiveDate,
    pub id: WordId,
    pub word: String,
}

impl DailySelection {
    /// Letter count of the selected word
    #[must_use]
    pub fn length(&self) -> usize {
        self.word.chars().count()
    }
}

/// One row of a schedule preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub word: Option<String>,
    pub used: bool,
}

/// Rolling hash of the `YYYY-MM-DD` form of `date`
///
/// Computes `hash = hash * 31 + char` in wrapping signed 32-bit arithmetic
/// and returns the absolute value.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use verbo::daily::date_hash;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(date_hash(date), 274_162_049);
/// ```
#[must_use]
pub fn date_hash(date: NaiveDate) -> u32 {
    let key = date.format("%Y-%m-%d").to_string();
    let hash = key.chars().fold(0i32, |hash, ch| {
        hash.wrapping_mul(31).wrapping_add(ch as i32)
    });
    hash.unsigned_abs()
}

/// Pick the word for `date` from the active, unused entries
///
/// `entries` must be in ascending id order, as returned by
/// [`WordRepository::entries`].
///
/// # Errors
/// Returns `SelectionError::NoWordsAvailable` when no entry is both active
/// and unused.
pub fn select_for_date(
    date: NaiveDate,
    entries: &[WordEntry],
) -> Result<DailySelection, SelectionError> {
    let available: Vec<&WordEntry> = entries.iter().filter(|e| e.is_available()).collect();
    if available.is_empty() {
        return Err(SelectionError::NoWordsAvailable {
            stats: UsageStats::from_entries(entries),
        });
    }

    let index = date_hash(date) as usize % available.len();
    let entry = available[index];
    debug!(
        "{date}: picked #{} {} (index {index} of {})",
        entry.id,
        entry.word,
        available.len()
    );

    Ok(DailySelection {
        date,
        id: entry.id,
        word: entry.word.clone(),
    })
}

/// Retire the word served on the previous day, at most once per day
///
/// The first call for `today` retires the word that was selected for the
/// previously served day (the last advanced date, or yesterday on first use)
/// and records `today`, in one repository update. Later calls for the same
/// day change nothing and see the pool after the retirement.
///
/// # Errors
/// Returns `StoreError` if the repository fails; the day stays unclaimed so
/// a retry performs the retirement.
pub fn advance_day<R>(repo: &R, today: NaiveDate) -> Result<AdvanceOutcome, StoreError>
where
    R: WordRepository + ?Sized,
{
    repo.advance_to(today, &|date, entries| {
        select_for_date(date, entries).ok().map(|selection| selection.id)
    })
}

/// The verb of the day: advance, then select for the clock's date
///
/// # Errors
/// Returns `SelectionError::NoWordsAvailable` once every active word has
/// been used, or `SelectionError::Store` on repository failures.
pub fn today<R, C>(repo: &R, clock: &C) -> Result<DailySelection, SelectionError>
where
    R: WordRepository + ?Sized,
    C: Clock + ?Sized,
{
    let date = clock.today();
    advance_day(repo, date)?;

    let entries = repo.entries()?;
    let selection = select_for_date(date, &entries)?;
    info!("verb of the day for {date}: {}", selection.word);
    Ok(selection)
}

/// Selections for `end` and the `days - 1` days before it, newest first
///
/// Uses the pool as it is now; nothing is marked.
///
/// # Errors
/// Returns `StoreError` if the repository cannot be read.
pub fn schedule<R>(repo: &R, end: NaiveDate, days: u32) -> Result<Vec<ScheduleEntry>, StoreError>
where
    R: WordRepository + ?Sized,
{
    let entries = repo.entries()?;

    Ok((0..i64::from(days))
        .map(|back| {
            let date = end - Duration::days(back);
            match select_for_date(date, &entries) {
                Ok(selection) => {
                    let used = entries
                        .iter()
                        .any(|e| e.id == selection.id && e.used);
                    ScheduleEntry {
                        date,
                        word: Some(selection.word),
                        used,
                    }
                }
                Err(_) => ScheduleEntry {
                    date,
                    word: None,
                    used: false,
                },
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::FixedClock;
    use crate::pool::MemoryRepository;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        MemoryRepository::from_words(words).entries().unwrap()
    }

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(date_hash(date("2025-01-01")), 274_162_049);
        assert_eq!(date_hash(date("2025-01-02")), 274_162_050);
        assert_eq!(date_hash(date("2025-07-12")), 274_340_827);
        assert_eq!(date_hash(date("2024-02-29")), 613_311_771);
    }

    #[test]
    fn selection_indexes_available_entries() {
        // 274162049 % 3 == 2
        let pool = entries(&["abrir", "beber", "comer"]);
        let selection = select_for_date(date("2025-01-01"), &pool).unwrap();
        assert_eq!(selection.word, "comer");
        assert_eq!(selection.length(), 5);
    }

    #[test]
    fn used_and_inactive_entries_are_skipped() {
        let mut pool = entries(&["abrir", "beber", "comer", "dizer", "falar"]);
        pool[0].used = true;
        pool[3].active = false;
        // available: beber, comer, falar; 274162049 % 3 == 2
        let selection = select_for_date(date("2025-01-01"), &pool).unwrap();
        assert_eq!(selection.word, "falar");
    }

    #[test]
    fn selection_is_deterministic() {
        let pool = entries(&["abrir", "beber", "comer", "dizer"]);
        let first = select_for_date(date("2025-07-12"), &pool).unwrap();
        for _ in 0..10 {
            assert_eq!(select_for_date(date("2025-07-12"), &pool).unwrap(), first);
        }
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let mut pool = entries(&["abrir", "beber"]);
        for entry in &mut pool {
            entry.used = true;
        }
        match select_for_date(date("2025-01-01"), &pool) {
            Err(SelectionError::NoWordsAvailable { stats }) => {
                assert_eq!(stats.total, 2);
                assert_eq!(stats.used, 2);
            }
            other => panic!("expected NoWordsAvailable, got {other:?}"),
        }
        assert!(matches!(
            select_for_date(date("2025-01-01"), &[]),
            Err(SelectionError::NoWordsAvailable { .. })
        ));
    }

    #[test]
    fn advance_marks_yesterdays_word_once() {
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer"]);

        // Yesterday was 2025-01-01 -> index 2 -> comer
        let outcome = advance_day(&repo, date("2025-01-02")).unwrap();
        assert_eq!(
            outcome,
            AdvanceOutcome::Marked {
                date: date("2025-01-01"),
                word: "comer".to_string()
            }
        );

        let second = advance_day(&repo, date("2025-01-02")).unwrap();
        assert_eq!(
            second,
            AdvanceOutcome::AlreadyAdvanced {
                last: date("2025-01-02")
            }
        );

        let used: Vec<String> = repo
            .entries()
            .unwrap()
            .into_iter()
            .filter(|e| e.used)
            .map(|e| e.word)
            .collect();
        assert_eq!(used, ["comer"]);
    }

    #[test]
    fn today_is_stable_across_calls() {
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer"]);
        let clock = FixedClock::on(date("2025-07-12"));

        let first = today(&repo, &clock).unwrap();
        let second = today(&repo, &clock).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.date, date("2025-07-12"));
    }

    #[test]
    fn next_day_retires_the_served_word() {
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer"]);
        let clock = FixedClock::on(date("2025-07-12"));

        let served = today(&repo, &clock).unwrap();
        let tomorrow = today(&repo, &clock.advanced(1)).unwrap();
        assert_ne!(served.word, tomorrow.word);

        let entries = repo.entries().unwrap();
        let retired = entries.iter().find(|e| e.id == served.id).unwrap();
        assert!(retired.used);
    }

    #[test]
    fn skipped_days_retire_the_last_served_word() {
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer", "falar"]);
        let clock = FixedClock::on(date("2025-01-01"));

        let served = today(&repo, &clock).unwrap();
        let outcome = advance_day(&repo, date("2025-01-05")).unwrap();
        assert_eq!(
            outcome,
            AdvanceOutcome::Marked {
                date: date("2025-01-01"),
                word: served.word
            }
        );
    }

    #[test]
    fn today_reports_exhaustion() {
        let repo = MemoryRepository::from_words(["abrir", "beber"]);
        let clock = FixedClock::on(date("2025-01-01"));

        // First use retires the word of 2024-12-31 (beber)
        assert_eq!(today(&repo, &clock).unwrap().word, "abrir");
        assert!(matches!(
            today(&repo, &clock.advanced(1)),
            Err(SelectionError::NoWordsAvailable { .. })
        ));

        assert_eq!(repo.reset_all().unwrap(), 2);
        assert_eq!(today(&repo, &clock.advanced(1)).unwrap().word, "abrir");
    }

    #[test]
    fn advance_with_empty_pool_marks_nothing() {
        let repo = MemoryRepository::new();
        assert_eq!(
            advance_day(&repo, date("2025-01-02")).unwrap(),
            AdvanceOutcome::NothingToMark {
                date: date("2025-01-01")
            }
        );
    }

    #[test]
    fn schedule_lists_newest_first() {
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer"]);
        let rows = schedule(&repo, date("2025-01-02"), 2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date("2025-01-02"));
        assert_eq!(rows[0].word.as_deref(), Some("abrir"));
        assert_eq!(rows[1].date, date("2025-01-01"));
        assert_eq!(rows[1].word.as_deref(), Some("comer"));
        assert!(rows.iter().all(|r| !r.used));
    }
}
