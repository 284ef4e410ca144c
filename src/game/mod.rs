//! Playing the game
//!
//! A session scores guesses against one secret and can be saved and resumed
//! within its day. Statistics and history track results across days, and the
//! share text summarizes a finished game.

mod history;
mod progress;
mod session;
mod share;
mod stats;

pub use history::{HISTORY_LIMIT, History, HistoryEntry};
pub use progress::SavedGame;
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameError, GameSession, GameStatus, MAX_ATTEMPTS_LIMIT, SessionOptions,
};
pub use share::share_text;
pub use stats::GameStats;
