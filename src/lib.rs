//! Verbo
//!
//! A daily word game for Portuguese verbs: one verb per day picked
//! deterministically from a pool, Wordle-style letter feedback, and an
//! optional hard mode.
//!
//! # Quick Start
//!
//! ```rust
//! use verbo::core::{LetterVerdict, score_str};
//!
//! let feedback = score_str("ficar", "ferir").unwrap();
//! assert_eq!(feedback.letters()[0].verdict, LetterVerdict::Correct);
//! assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
//! ```
//!
//! ```rust
//! use verbo::daily::{FixedClock, today};
//! use verbo::pool::MemoryRepository;
//!
//! let pool = MemoryRepository::from_words(["abrir", "beber", "comer"]);
//! let clock = FixedClock::on("2025-01-02".parse().unwrap());
//! let verb = today(&pool, &clock).unwrap();
//! assert_eq!(verb.date.to_string(), "2025-01-02");
//! ```

// Core domain types
pub mod core;

// Daily word selection
pub mod daily;

// Word pool storage
pub mod pool;

// Word lists and dictionary
pub mod wordlists;

// Game sessions and statistics
pub mod game;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
