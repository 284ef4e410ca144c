//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_advance_outcome, print_audit, print_entries, print_feedback, print_game_stats,
    print_guess, print_history, print_import_report, print_json, print_schedule, print_today,
    print_usage_stats, print_validation,
};
