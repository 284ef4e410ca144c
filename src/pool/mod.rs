//! The pool of candidate daily words
//!
//! Entries are stored behind the [`WordRepository`] trait with two backends:
//! an in-memory pool for tests and practice games, and a JSON file for the
//! command-line tool.

mod entry;
mod import;
mod json_file;
mod memory;
mod repository;

pub use entry::{UsageStats, WordEntry, WordId};
pub use import::{ImportReport, VerbError, import_words, validate_verb};
pub use json_file::JsonFileRepository;
pub(crate) use json_file::{read_json, write_json};
pub use memory::MemoryRepository;
pub use repository::{AdvanceOutcome, DayPicker, PoolState, StoreError, WordRepository};
