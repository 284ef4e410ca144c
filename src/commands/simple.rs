//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use super::play::{GameSetup, record_result, save_progress};
use crate::config::DataPaths;
use crate::game::{GameError, GameStatus, share_text};
use crate::output::formatters::feedback_tiles;
use crate::output::print_game_stats;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or the player files cannot be
/// updated.
pub fn run_simple(setup: &GameSetup, paths: &DataPaths) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_simple_with(setup, paths, &mut input, &mut output)
}

/// Same as [`run_simple`] over arbitrary input and output
///
/// # Errors
///
/// Returns an error if I/O fails or the player files cannot be updated.
pub fn run_simple_with<R: BufRead, W: Write>(
    setup: &GameSetup,
    paths: &DataPaths,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut session = setup.session();
    let max = setup.options.max_attempts;

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║                V E R B O                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    if setup.practice {
        writeln!(out, "Practice game: guess a random {}-letter verb.", setup.secret.letters().len())?;
    } else {
        writeln!(out, "Guess the verb of {}.", setup.date)?;
    }
    if setup.options.hard_mode {
        writeln!(out, "Hard mode: every hint must be reused.")?;
    }
    writeln!(out, "You have {max} attempts. Type 'quit' to leave.\n")?;

    if setup.is_resumed() {
        writeln!(out, "Resuming today's game:")?;
        for feedback in session.history() {
            writeln!(out, "           {}", feedback_tiles(feedback))?;
        }
        if session.is_over() {
            writeln!(out, "\nYou already played today.")?;
        }
    }

    while !session.is_over() {
        write!(out, "Attempt {}/{max}: ", session.attempts() + 1)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let guess = line.trim();

        if matches!(guess.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(out, "\n👋 Até amanhã!\n")?;
            return Ok(());
        }

        match session.submit(guess, Some(&setup.dictionary)) {
            Ok(feedback) => {
                writeln!(out, "           {}", feedback_tiles(&feedback))?;
                save_progress(paths, setup, &session).context("failed to save the game")?;
            }
            Err(GameError::GameOver) => break,
            Err(e) => writeln!(out, "❌ {e}")?,
        }
    }

    writeln!(out)?;
    match session.status() {
        GameStatus::Won => {
            let turn = session.attempts();
            writeln!(
                out,
                "{} Solved in {} {}",
                "🎉".bright_green(),
                turn.to_string().bright_cyan().bold(),
                if turn == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameStatus::Lost => {
            writeln!(
                out,
                "The verb was {}",
                setup.secret.text().to_uppercase().bright_yellow().bold()
            )?;
        }
        GameStatus::InProgress => {}
    }

    let won = session.status() == GameStatus::Won;
    writeln!(
        out,
        "\n{}\n",
        share_text(session.history(), won, max, setup.game_number)
    )?;

    if let Some(stats) = record_result(paths, setup, &session)? {
        print_game_stats(&stats);
    }
    Ok(())
}
