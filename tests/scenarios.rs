//! End-to-end behavior of scoring, selection and hard mode

use verbo::core::{HardModeViolation, LetterVerdict, Word, score_str, validate_hard_mode};
use verbo::daily::select_for_date;
use verbo::pool::{MemoryRepository, WordRepository};

use LetterVerdict::{Correct, Incorrect, WrongPosition};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn exact_guess_is_all_correct() {
    let feedback = score_str("comer", "comer").unwrap();
    assert_eq!(feedback.verdicts(), [Correct; 5]);
    assert!(feedback.is_win());
}

#[test]
fn ficar_against_ferir() {
    let feedback = score_str("ficar", "ferir").unwrap();
    assert_eq!(
        feedback.verdicts(),
        [Correct, WrongPosition, Incorrect, Incorrect, Correct]
    );
}

#[test]
fn repeated_letters_are_limited_by_the_secret() {
    let feedback = score_str("rorro", "carro").unwrap();
    let marked_r = feedback
        .letters()
        .iter()
        .filter(|l| l.letter == 'r' && l.verdict != Incorrect)
        .count();
    assert_eq!(marked_r, 2);
    assert_eq!(
        feedback.verdicts(),
        [Incorrect, Incorrect, Correct, Correct, Correct]
    );
}

#[test]
fn single_word_pool_is_stable_for_a_date() {
    let pool = MemoryRepository::from_words(["abrir"]);
    let date = "2025-01-01".parse().unwrap();
    let entries = pool.entries().unwrap();

    let first = select_for_date(date, &entries).unwrap();
    let second = select_for_date(date, &entries).unwrap();
    assert_eq!(first.word, "abrir");
    assert_eq!(second.word, "abrir");
    assert_eq!(first.id, second.id);
}

#[test]
fn hard_mode_names_the_locked_position() {
    let history = [score_str("ficar", "ferir").unwrap()];
    let err = validate_hard_mode(&word("comer"), &history).unwrap_err();
    assert_eq!(
        err,
        HardModeViolation::PositionMismatch {
            position: 0,
            letter: 'f'
        }
    );
    assert!(validate_hard_mode(&word("fugir"), &history).is_ok());
}
