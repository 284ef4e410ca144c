//! Distribution audit
//!
//! Runs the daily selection over a range of dates against a fixed pool and
//! counts how often each word comes up.

use crate::daily::select_for_date;
use crate::pool::WordEntry;
use chrono::{Duration, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::time::Instant;

/// How selections spread over the pool
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub start: NaiveDate,
    pub days: u32,
    /// Dates for which no word could be selected
    pub failed: u32,
    /// `(word, times selected)`, most frequent first, then alphabetical
    pub counts: Vec<(String, u32)>,
    /// Available words never selected
    pub never_selected: Vec<String>,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
    pub elapsed_ms: u128,
}

impl AuditReport {
    /// `max - min` over the available words
    #[must_use]
    pub const fn spread(&self) -> u32 {
        self.max - self.min
    }
}

/// Select for every date in `[start, start + days)`
///
/// Dates are processed in parallel; the pool is never modified. Offsets
/// that overflow the date range are counted as failed.
#[must_use]
pub fn run_audit(entries: &[WordEntry], start: NaiveDate, days: u32, progress: bool) -> AuditReport {
    let timer = Instant::now();

    let pb = if progress {
        let pb = ProgressBar::new(u64::from(days));
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let (histogram, failed) = (0..days)
        .into_par_iter()
        .map(|offset| {
            pb.inc(1);
            // Dates past the calendar's end count as failed
            start
                .checked_add_signed(Duration::days(i64::from(offset)))
                .and_then(|date| select_for_date(date, entries).ok())
                .map(|s| s.word)
        })
        .fold(
            || (FxHashMap::<String, u32>::default(), 0u32),
            |(mut histogram, mut failed), word| {
                match word {
                    Some(word) => *histogram.entry(word).or_insert(0) += 1,
                    None => failed += 1,
                }
                (histogram, failed)
            },
        )
        .reduce(
            || (FxHashMap::default(), 0),
            |(mut a, fa), (b, fb)| {
                for (word, count) in b {
                    *a.entry(word).or_insert(0) += count;
                }
                (a, fa + fb)
            },
        );
    pb.finish_and_clear();

    let mut never_selected: Vec<String> = entries
        .iter()
        .filter(|e| e.is_available() && !histogram.contains_key(&e.word))
        .map(|e| e.word.clone())
        .collect();
    never_selected.sort();

    let mut counts: Vec<(String, u32)> = histogram.into_iter().collect();
    counts.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));

    let min = if never_selected.is_empty() {
        counts.iter().map(|&(_, c)| c).min().unwrap_or(0)
    } else {
        0
    };
    let max = counts.first().map_or(0, |&(_, c)| c);
    let buckets = counts.len() + never_selected.len();
    let mean = if buckets == 0 {
        0.0
    } else {
        f64::from(days - failed) / buckets as f64
    };

    info!("audited {days} days starting {start}");
    AuditReport {
        start,
        days,
        failed,
        counts,
        never_selected,
        min,
        max,
        mean,
        elapsed_ms: timer.elapsed().as_millis(),
    }
}
