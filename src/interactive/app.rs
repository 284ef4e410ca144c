//! TUI application state and logic

use crate::commands::{GameSetup, practice_setup, record_result, save_progress};
use crate::config::DataPaths;
use crate::core::{Feedback, LetterVerdict, WORD_LENGTH, is_letter, to_lower};
use crate::game::{GameSession, GameStats, GameStatus, share_text};
use crate::wordlists::VERBS;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App {
    pub setup: GameSetup,
    pub session: GameSession,
    pub paths: DataPaths,
    pub stats: Option<GameStats>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Best verdict seen so far for each letter
    pub keyboard: FxHashMap<char, LetterVerdict>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(setup: GameSetup, paths: DataPaths) -> Self {
        let session = setup.session();
        let mut app = Self {
            setup,
            session,
            paths,
            stats: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            keyboard: FxHashMap::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.welcome();
        app.restore();
        app
    }

    /// Catch up with guesses replayed from a saved game
    fn restore(&mut self) {
        if self.session.attempts() == 0 {
            return;
        }
        let history = self.session.history().to_vec();
        for feedback in &history {
            self.update_keyboard(feedback);
        }
        self.add_message("Resumed today's game.", MessageStyle::Info);
        if self.session.is_over() {
            self.add_message("You already played today.", MessageStyle::Info);
            self.input_mode = InputMode::Finished;
        }
    }

    fn update_keyboard(&mut self, feedback: &Feedback) {
        for letter in feedback.letters() {
            let key = to_lower(letter.letter);
            let best = self.keyboard.entry(key).or_insert(letter.verdict);
            if rank(letter.verdict) > rank(*best) {
                *best = letter.verdict;
            }
        }
    }

    fn welcome(&mut self) {
        let intro = if self.setup.practice {
            "Practice game: guess a random verb.".to_string()
        } else {
            format!("Guess the verb of {}.", self.setup.date)
        };
        self.add_message(&intro, MessageStyle::Info);
        if self.setup.options.hard_mode {
            self.add_message("Hard mode: every hint must be reused.", MessageStyle::Info);
        }
    }

    pub fn type_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < WORD_LENGTH && is_letter(c) {
            self.input_buffer.push(to_lower(c));
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        match self.session.submit(&guess, Some(&self.setup.dictionary)) {
            Ok(feedback) => {
                self.update_keyboard(&feedback);
                if let Err(e) = save_progress(&self.paths, &self.setup, &self.session) {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
                if self.session.is_over() {
                    self.finish();
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
            }
        }
    }

    fn finish(&mut self) {
        self.input_mode = InputMode::Finished;

        match self.session.status() {
            GameStatus::Won => {
                let celebration = match self.session.attempts() {
                    1 => "🎯 De primeira! Extraordinary!",
                    2 => "🔥 Magnificent! Two guesses!",
                    3 => "✨ Splendid! Three guesses!",
                    4 => "👏 Great job! Four guesses!",
                    5 => "🎉 Nice work! Five guesses!",
                    _ => "😅 Phew! Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let text = format!(
                    "The verb was {}",
                    self.setup.secret.text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
            }
            GameStatus::InProgress => {}
        }

        match record_result(&self.paths, &self.setup, &self.session) {
            Ok(stats) => self.stats = stats,
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        let next = if self.setup.practice {
            "Press 'n' for a new practice game or 'q' to quit."
        } else {
            "Come back tomorrow! Press 'n' to practice or 'q' to quit."
        };
        self.add_message(next, MessageStyle::Info);
    }

    /// Start a practice game with a fresh random verb
    pub fn new_game(&mut self) {
        match practice_setup(VERBS, self.setup.date, self.setup.options) {
            Some(setup) => {
                self.session = setup.session();
                self.setup = setup;
                self.keyboard.clear();
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.welcome();
            }
            None => self.add_message("No verbs to practice with!", MessageStyle::Error),
        }
    }

    /// Share text once the game is over
    #[must_use]
    pub fn share(&self) -> Option<String> {
        self.session.is_over().then(|| {
            share_text(
                self.session.history(),
                self.session.status() == GameStatus::Won,
                self.setup.options.max_attempts,
                self.setup.game_number,
            )
        })
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_char(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

const fn rank(verdict: LetterVerdict) -> u8 {
    match verdict {
        LetterVerdict::Incorrect => 0,
        LetterVerdict::WrongPosition => 1,
        LetterVerdict::Correct => 2,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share())
}
