//! Interactive TUI game
//!
//! A ratatui front-end over a [`GameSession`](crate::game::GameSession).

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
