//! One play-through of a secret word

use crate::core::{Feedback, HardModeViolation, Word, WordError, validate_hard_mode};
use crate::wordlists::Dictionary;
use log::debug;
use thiserror::Error;

/// Attempts allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt limit a session accepts
pub const MAX_ATTEMPTS_LIMIT: usize = 26;

/// Rules of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub max_attempts: usize,
    pub hard_mode: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hard_mode: false,
        }
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A guess the session refused; refused guesses cost no attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("\"{0}\" is not in the word list")]
    UnknownWord(String),
    #[error("hard mode: {0}")]
    HardMode(#[from] HardModeViolation),
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    options: SessionOptions,
    history: Vec<Feedback>,
    status: GameStatus,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word, options: SessionOptions) -> Self {
        Self {
            secret,
            options,
            history: Vec::with_capacity(options.max_attempts.min(MAX_ATTEMPTS_LIMIT)),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuild a session by replaying guesses accepted earlier
    ///
    /// The dictionary is not consulted again; hard mode still is.
    ///
    /// # Errors
    /// Returns the `GameError` of the first guess that no longer applies.
    pub fn resume(
        secret: Word,
        options: SessionOptions,
        guesses: &[String],
    ) -> Result<Self, GameError> {
        let mut session = Self::new(secret, options);
        for guess in guesses {
            session.submit(guess, None)?;
        }
        Ok(session)
    }

    /// Submit a guess
    ///
    /// Checks run in order: game over, word format, dictionary (when given),
    /// hard mode. Only a guess that passes all of them is scored.
    ///
    /// # Errors
    /// Returns the first `GameError` that applies.
    pub fn submit(
        &mut self,
        guess: &str,
        dictionary: Option<&Dictionary>,
    ) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let word = Word::new(guess)?;

        if let Some(dictionary) = dictionary
            && !dictionary.contains(word.text())
        {
            return Err(GameError::UnknownWord(word.lowercase()));
        }

        if self.options.hard_mode {
            validate_hard_mode(&word, &self.history)?;
        }

        let feedback = Feedback::calculate(&word, &self.secret);
        self.history.push(feedback);

        self.status = if feedback.is_win() {
            GameStatus::Won
        } else if self.history.len() >= self.options.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        debug!(
            "attempt {}/{}: {} -> {:?}",
            self.history.len(),
            self.options.max_attempts,
            feedback.to_emoji(),
            self.status
        );

        Ok(feedback)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// Accepted guesses as typed, oldest first
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        self.history.iter().map(Feedback::word).collect()
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.options.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    /// The secret word; callers should only reveal it once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: &str, hard_mode: bool) -> GameSession {
        GameSession::new(
            Word::new(secret).unwrap(),
            SessionOptions {
                hard_mode,
                ..SessionOptions::default()
            },
        )
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let mut game = session("comer", false);
        let feedback = game.submit("COMER", None).unwrap();
        assert!(feedback.is_win());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.submit("abrir", None), Err(GameError::GameOver));
    }

    #[test]
    fn six_misses_lose() {
        let mut game = session("comer", false);
        for _ in 0..5 {
            game.submit("abrir", None).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.submit("abrir", None).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn rejected_guesses_do_not_count() {
        let mut game = session("comer", false);
        assert!(matches!(
            game.submit("abc", None),
            Err(GameError::InvalidWord(WordError::InvalidLength(3)))
        ));

        let dict = Dictionary::from_lists(["comer", "abrir"], Vec::<&str>::new());
        assert_eq!(
            game.submit("zebra", Some(&dict)),
            Err(GameError::UnknownWord("zebra".to_string()))
        );
        assert_eq!(game.attempts(), 0);

        game.submit("abrir", Some(&dict)).unwrap();
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn hard_mode_is_enforced() {
        let mut game = session("ferir", true);
        game.submit("ficar", None).unwrap();

        // F is known at position 1
        assert!(matches!(
            game.submit("abrir", None),
            Err(GameError::HardMode(HardModeViolation::PositionMismatch {
                position: 0,
                letter: 'f'
            }))
        ));
        assert_eq!(game.attempts(), 1);

        // Same guess is fine in normal mode
        let mut easy = session("ferir", false);
        easy.submit("ficar", None).unwrap();
        assert!(easy.submit("abrir", None).is_ok());
    }

    #[test]
    fn custom_attempt_limit() {
        let mut game = GameSession::new(
            Word::new("comer").unwrap(),
            SessionOptions {
                max_attempts: 2,
                hard_mode: false,
            },
        );
        game.submit("abrir", None).unwrap();
        game.submit("abrir", None).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn resume_replays_accepted_guesses() {
        let mut game = session("ferir", true);
        game.submit("ficar", None).unwrap();
        game.submit("fugir", None).unwrap();

        let resumed =
            GameSession::resume(Word::new("ferir").unwrap(), game.options(), &game.guesses())
                .unwrap();
        assert_eq!(resumed.history(), game.history());
        assert_eq!(resumed.status(), GameStatus::InProgress);
        assert_eq!(resumed.guesses(), ["ficar", "fugir"]);
    }

    #[test]
    fn resume_rejects_guesses_that_break_the_rules() {
        let options = SessionOptions {
            hard_mode: true,
            ..SessionOptions::default()
        };
        let guesses = ["ficar".to_string(), "abrir".to_string()];
        assert!(matches!(
            GameSession::resume(Word::new("ferir").unwrap(), options, &guesses),
            Err(GameError::HardMode(_))
        ));
    }

    #[test]
    fn huge_attempt_limit_does_not_preallocate() {
        let mut game = GameSession::new(
            Word::new("comer").unwrap(),
            SessionOptions {
                max_attempts: usize::MAX,
                hard_mode: false,
            },
        );
        game.submit("abrir", None).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
