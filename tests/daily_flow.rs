//! Several days of play against a pool persisted on disk

use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use verbo::commands::simple::run_simple_with;
use verbo::commands::{daily_setup, reset_pool, run_history, seed_pool};
use verbo::config::DataPaths;
use verbo::daily::{AdvanceOutcome, Clock, FixedClock, SelectionError, advance_day, today};
use verbo::game::{GameStats, SessionOptions};
use verbo::pool::{JsonFileRepository, MemoryRepository, StoreError, UsageStats, WordRepository};

#[test]
fn each_day_retires_the_word_served_the_day_before() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("pool.json"));
    seed_pool(&repo).unwrap();

    let mut clock = FixedClock::on("2025-07-11".parse().unwrap());
    let mut served = Vec::new();
    for _ in 0..3 {
        let selection = today(&repo, &clock).unwrap();
        assert_eq!(today(&repo, &clock).unwrap(), selection);
        served.push(selection.word);
        clock = clock.advanced(1);
    }
    today(&repo, &clock).unwrap();

    // Reopen to read what was persisted
    let reopened = JsonFileRepository::new(repo.path());
    let entries = reopened.entries().unwrap();
    for word in &served {
        let entry = entries.iter().find(|e| &e.word == word).unwrap();
        assert!(entry.used, "{word} should be retired");
    }
    // Three served days plus the day before the first one
    assert_eq!(UsageStats::from_entries(&entries).used, 4);
    assert_eq!(
        reopened.last_advanced().unwrap(),
        Some("2025-07-14".parse().unwrap())
    );
}

#[test]
fn advancing_twice_on_one_day_changes_nothing() {
    let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer"]);
    let day = "2025-01-02".parse().unwrap();

    assert!(matches!(
        advance_day(&repo, day).unwrap(),
        AdvanceOutcome::Marked { .. }
    ));
    let before = repo.snapshot();
    assert!(matches!(
        advance_day(&repo, day).unwrap(),
        AdvanceOutcome::AlreadyAdvanced { .. }
    ));
    assert_eq!(repo.snapshot(), before);
}

#[test]
fn exhausted_pool_needs_a_reset() {
    let repo = MemoryRepository::from_words(["abrir", "beber"]);
    let mut clock = FixedClock::on("2025-01-01".parse().unwrap());

    today(&repo, &clock).unwrap();
    clock = clock.advanced(1);
    match today(&repo, &clock) {
        Err(SelectionError::NoWordsAvailable { stats }) => {
            assert!(stats.is_exhausted());
            assert_eq!(stats.used, 2);
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }

    assert_eq!(reset_pool(&repo).unwrap(), 2);
    assert!(today(&repo, &clock).is_ok());
}

#[test]
fn daily_game_is_recorded_once() {
    colored::control::set_override(false);
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::beside(dir.path().join("stats.json"));
    let repo = MemoryRepository::from_words(["abrir", "beber", "comer", "dizer", "falar"]);
    let clock = FixedClock::on("2025-01-02".parse().unwrap());

    let setup = daily_setup(&repo, &clock, SessionOptions::default(), &paths).unwrap();
    assert_eq!(setup.game_number, Some(2));
    let secret = setup.secret.text().to_string();

    let mut out = Vec::new();
    let mut input = Cursor::new(format!("{secret}\n").into_bytes());
    run_simple_with(&setup, &paths, &mut input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Verbo #2 1/6"));

    // Playing the same day again does not count twice
    let mut input = Cursor::new(format!("{secret}\n").into_bytes());
    run_simple_with(&setup, &paths, &mut input, &mut Vec::new()).unwrap();

    let stats = GameStats::load(&paths.stats).unwrap();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.guess_distribution[0], 1);

    let history = run_history(&paths.history, clock.today(), None).unwrap();
    assert_eq!(history.entries.len(), 1);
    assert_eq!(history.entries[0].word, secret);
}

#[test]
fn failed_write_leaves_the_day_unclaimed() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("pool.json"));
    seed_pool(&repo).unwrap();
    let before = fs::read_to_string(repo.path()).unwrap();

    // A directory where the temporary file goes makes every save fail
    let blocker = dir.path().join("pool.json.tmp");
    fs::create_dir(&blocker).unwrap();

    let clock = FixedClock::on("2025-03-10".parse().unwrap());
    assert!(matches!(
        today(&repo, &clock),
        Err(SelectionError::Store(StoreError::Io { .. }))
    ));
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
    assert_eq!(repo.last_advanced().unwrap(), None);
    assert_eq!(UsageStats::from_entries(&repo.entries().unwrap()).used, 0);

    // Once writes work again the retry retires yesterday's word
    fs::remove_dir(&blocker).unwrap();
    let selection = today(&repo, &clock).unwrap();
    assert_eq!(
        repo.last_advanced().unwrap(),
        Some("2025-03-10".parse().unwrap())
    );
    let entries = repo.entries().unwrap();
    assert_eq!(UsageStats::from_entries(&entries).used, 1);
    assert!(
        !entries
            .iter()
            .find(|e| e.id == selection.id)
            .unwrap()
            .used
    );
}
