//! Shared setup for the playable front-ends

use crate::config::DataPaths;
use crate::core::Word;
use crate::daily::{Clock, SelectionError, today};
use crate::game::{
    GameSession, GameStats, GameStatus, History, HistoryEntry, SavedGame, SessionOptions,
};
use crate::pool::{StoreError, UsageStats, WordRepository};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use log::{info, warn};
use rand::seq::IndexedRandom;

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub secret: Word,
    pub date: NaiveDate,
    /// Practice games use a random secret and are not recorded
    pub practice: bool,
    pub options: SessionOptions,
    pub dictionary: Dictionary,
    pub game_number: Option<u32>,
    /// Guesses restored from a saved game of the same day
    pub resume: Vec<String>,
}

impl GameSetup {
    /// A session with any restored guesses already played
    #[must_use]
    pub fn session(&self) -> GameSession {
        GameSession::resume(self.secret.clone(), self.options, &self.resume).unwrap_or_else(|e| {
            warn!("saved game for {} could not be restored: {e}", self.date);
            GameSession::new(self.secret.clone(), self.options)
        })
    }

    #[must_use]
    pub fn is_resumed(&self) -> bool {
        !self.resume.is_empty()
    }
}

/// Set up today's game from the pool, resuming a game saved earlier today
///
/// The game number counts retired words, so it grows by one per day. A
/// resumed game keeps the hard mode setting it was started with.
///
/// # Errors
/// Returns `SelectionError` when no verb is available, the verb of the day
/// is not a playable word, or a file cannot be read.
pub fn daily_setup<R, C>(
    repo: &R,
    clock: &C,
    options: SessionOptions,
    paths: &DataPaths,
) -> Result<GameSetup, SelectionError>
where
    R: WordRepository + ?Sized,
    C: Clock + ?Sized,
{
    let selection = today(repo, clock)?;
    let entries = repo.entries()?;
    let stats = UsageStats::from_entries(&entries);

    let secret = Word::new(&selection.word).map_err(|source| SelectionError::Unplayable {
        id: selection.id,
        word: selection.word.clone(),
        source,
    })?;

    let mut options = options;
    let mut resume = Vec::new();
    if let Some(saved) = SavedGame::load(&paths.game, selection.date, &selection.word)?
        && !saved.guesses.is_empty()
    {
        info!(
            "resuming game of {} after {} guesses",
            saved.date,
            saved.guesses.len()
        );
        options.hard_mode = saved.hard_mode;
        resume = saved.guesses;
    }

    let dictionary = Dictionary::embedded().with_verbs(entries.iter().map(|e| e.word.as_str()));
    let game_number = u32::try_from(stats.used + 1).ok();

    Ok(GameSetup {
        secret,
        date: selection.date,
        practice: false,
        options,
        dictionary,
        game_number,
        resume,
    })
}

/// Set up a practice game with a random secret from `words`
#[must_use]
pub fn practice_setup(words: &[&str], date: NaiveDate, options: SessionOptions) -> Option<GameSetup> {
    let mut rng = rand::rng();
    let playable: Vec<Word> = words.iter().filter_map(|w| Word::new(w).ok()).collect();
    let secret = playable.choose(&mut rng)?.clone();

    Some(GameSetup {
        secret,
        date,
        practice: true,
        options,
        dictionary: Dictionary::embedded().with_verbs(words.iter()),
        game_number: None,
        resume: Vec::new(),
    })
}

/// Save the guesses of a daily game so it can be resumed today
///
/// # Errors
/// Returns `StoreError` if the file cannot be written.
pub fn save_progress(
    paths: &DataPaths,
    setup: &GameSetup,
    session: &GameSession,
) -> Result<(), StoreError> {
    if setup.practice {
        return Ok(());
    }
    SavedGame::capture(setup.date, session).save(&paths.game)
}

/// Record a finished daily game in the stats and history files
///
/// Returns the updated stats, or `None` for practice and unfinished games.
///
/// # Errors
/// Returns `StoreError` if a file cannot be read or written.
pub fn record_result(
    paths: &DataPaths,
    setup: &GameSetup,
    session: &GameSession,
) -> Result<Option<GameStats>, StoreError> {
    if setup.practice {
        return Ok(None);
    }

    let mut stats = GameStats::load(&paths.stats)?;
    let recorded = match session.status() {
        GameStatus::Won => stats.record_win(setup.date, session.attempts()),
        GameStatus::Lost => stats.record_loss(setup.date),
        GameStatus::InProgress => return Ok(None),
    };

    if recorded {
        stats.save(&paths.stats)?;

        let mut history = History::load(&paths.history)?;
        history.record(HistoryEntry::from_session(setup.date, session));
        history.save(&paths.history)?;
        info!("recorded {:?} for {}", session.status(), setup.date);
    }
    Ok(Some(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::FixedClock;
    use crate::pool::MemoryRepository;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        "2025-07-12".parse().unwrap()
    }

    fn paths(dir: &TempDir) -> DataPaths {
        DataPaths::beside(dir.path().join("stats.json"))
    }

    #[test]
    fn daily_setup_uses_the_verb_of_the_day() {
        let dir = TempDir::new().unwrap();
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer"]);
        let clock = FixedClock::on(date());

        let setup = daily_setup(&repo, &clock, SessionOptions::default(), &paths(&dir)).unwrap();
        let expected = today(&repo, &clock).unwrap();
        assert_eq!(setup.secret.lowercase(), expected.word);
        assert_eq!(setup.game_number, Some(2));
        assert!(!setup.practice);
        assert!(!setup.is_resumed());
        assert!(setup.dictionary.contains("dizer"));
    }

    #[test]
    fn unplayable_pool_word_is_not_reported_as_exhaustion() {
        let dir = TempDir::new().unwrap();
        let broken = MemoryRepository::from_words(["partir"]);
        let clock = FixedClock::on(date());
        // Claim the day without retiring anything
        broken.advance_to(date(), &|_, _| None).unwrap();

        match daily_setup(&broken, &clock, SessionOptions::default(), &paths(&dir)) {
            Err(SelectionError::Unplayable { word, .. }) => assert_eq!(word, "partir"),
            other => panic!("expected an unplayable word, got {other:?}"),
        }
    }

    #[test]
    fn daily_game_resumes_with_its_hard_mode() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer"]);
        let clock = FixedClock::on(date());

        let hard = SessionOptions {
            hard_mode: true,
            ..SessionOptions::default()
        };
        let setup = daily_setup(&repo, &clock, hard, &paths).unwrap();
        let mut session = setup.session();
        session.submit("morar", None).unwrap();
        save_progress(&paths, &setup, &session).unwrap();

        let resumed = daily_setup(&repo, &clock, SessionOptions::default(), &paths).unwrap();
        assert!(resumed.is_resumed());
        assert!(resumed.options.hard_mode);
        assert_eq!(resumed.session().history(), session.history());

        // A new day starts fresh
        let tomorrow = daily_setup(&repo, &clock.advanced(1), SessionOptions::default(), &paths)
            .unwrap();
        assert!(!tomorrow.is_resumed());
    }

    #[test]
    fn practice_picks_from_the_list() {
        let words = ["abrir", "comer"];
        let setup = practice_setup(&words, date(), SessionOptions::default()).unwrap();
        assert!(words.contains(&setup.secret.text()));
        assert!(setup.practice);
        assert!(practice_setup(&[], date(), SessionOptions::default()).is_none());
    }

    #[test]
    fn practice_progress_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let setup = practice_setup(&["comer"], date(), SessionOptions::default()).unwrap();
        let mut session = setup.session();
        session.submit("abrir", None).unwrap();
        save_progress(&paths, &setup, &session).unwrap();
        assert!(!paths.game.exists());
    }

    #[test]
    fn only_daily_games_are_recorded() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let words = ["comer"];

        let mut setup = practice_setup(&words, date(), SessionOptions::default()).unwrap();
        let mut session = setup.session();
        session.submit("comer", None).unwrap();
        assert_eq!(record_result(&paths, &setup, &session).unwrap(), None);

        setup.practice = false;
        let stats = record_result(&paths, &setup, &session).unwrap().unwrap();
        assert_eq!(stats.games_won, 1);
        assert_eq!(GameStats::load(&paths.stats).unwrap(), stats);

        let history = History::load(&paths.history).unwrap();
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.entries()[0].word, "comer");
        assert_eq!(history.entries()[0].attempts, 1);

        // Same day again changes nothing
        let again = record_result(&paths, &setup, &session).unwrap().unwrap();
        assert_eq!(again.games_played, 1);
        assert_eq!(History::load(&paths.history).unwrap(), history);
    }
}
