//! Game calendar
//!
//! The daily word changes at midnight in a fixed UTC offset (UTC-3 by
//! default), whatever the host time zone is.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// Default offset of the game calendar, in hours
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Offset applied to `now` to obtain the game date
    fn offset(&self) -> FixedOffset;

    /// Today's date in the game calendar
    fn today(&self) -> NaiveDate {
        local_date(self.now(), self.offset())
    }
}

/// Wall clock with a fixed calendar offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Clock at a whole-hour offset; `None` when outside ±23 hours
    #[must_use]
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        offset_from_hours(hours).map(Self::new)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(default_offset())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    /// Clock whose game date is `date`, at local noon
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        let offset = default_offset();
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        let instant = midnight + Duration::hours(12)
            - Duration::seconds(i64::from(offset.local_minus_utc()));
        Self::new(instant, offset)
    }

    /// The same clock `days` later
    #[must_use]
    pub fn advanced(self, days: i64) -> Self {
        Self::new(self.instant + Duration::days(days), self.offset)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Calendar date of `now` shifted by `offset`
#[must_use]
pub fn local_date(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// The game calendar's default offset
#[must_use]
pub fn default_offset() -> FixedOffset {
    offset_from_hours(DEFAULT_UTC_OFFSET_HOURS).unwrap_or_else(|| Utc.fix())
}

/// Fixed offset for a whole number of hours east of UTC
#[must_use]
pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
}
