//! Command implementations

pub mod audit;
pub mod daily;
pub mod history;
pub mod play;
pub mod pool;
pub mod schedule;
pub mod simple;

pub use audit::{AuditReport, run_audit};
pub use daily::{
    GuessError, GuessReport, TodayReport, ValidationReport, run_guess, run_today, run_validate,
};
pub use history::{HistoryReport, run_history};
pub use play::{GameSetup, daily_setup, practice_setup, record_result, save_progress};
pub use pool::{
    advance_pool, import_file, list_pool, pool_stats, reset_pool, seed_pool, set_word_active,
};
pub use schedule::{ScheduleReport, run_schedule};
pub use simple::run_simple;
