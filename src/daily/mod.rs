//! Verb of the day
//!
//! Calendar handling and the deterministic date-to-word selection, plus the
//! once-per-day retirement of the previous word.

mod calendar;
mod selector;

pub use calendar::{
    Clock, DEFAULT_UTC_OFFSET_HOURS, FixedClock, SystemClock, default_offset, local_date,
    offset_from_hours,
};
pub use crate::pool::AdvanceOutcome;
pub use selector::{
    DailySelection, ScheduleEntry, SelectionError, advance_day, date_hash,
    schedule, select_for_date, today,
};
