//! Word lists for Verbo
//!
//! Embedded seed verbs and common words, file loading for imports, and the
//! dictionary of accepted guesses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{AttemptError, Dictionary, WordKind};
pub use embedded::{COMMON_WORDS, COMMON_WORDS_COUNT, VERBS, VERBS_COUNT};
