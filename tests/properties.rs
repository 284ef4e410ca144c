//! Property checks for scoring and hard mode

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use verbo::core::{LetterVerdict, Word, score, validate_hard_mode};

fn five_letters() -> impl Strategy<Value = String> {
    // Small alphabet so repeated letters are common
    "[a-e]{5}"
}

fn counts(word: &Word) -> FxHashMap<char, usize> {
    let mut map = FxHashMap::default();
    for &c in word.letters() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

proptest! {
    #[test]
    fn marked_letters_never_exceed_the_secret(guess in five_letters(), secret in five_letters()) {
        let guess = Word::new(&guess).unwrap();
        let secret = Word::new(&secret).unwrap();
        let feedback = score(&guess, &secret);
        let available = counts(&secret);

        let mut marked: FxHashMap<char, usize> = FxHashMap::default();
        for (i, verdict) in feedback.verdicts().into_iter().enumerate() {
            if verdict != LetterVerdict::Incorrect {
                *marked.entry(guess.letters()[i]).or_insert(0) += 1;
            }
        }
        for (letter, n) in marked {
            prop_assert!(n <= available.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn exact_matches_are_always_correct(guess in five_letters(), secret in five_letters()) {
        let guess = Word::new(&guess).unwrap();
        let secret = Word::new(&secret).unwrap();
        let verdicts = score(&guess, &secret).verdicts();
        for i in 0..5 {
            if guess.letters()[i] == secret.letters()[i] {
                prop_assert_eq!(verdicts[i], LetterVerdict::Correct);
            } else {
                prop_assert_ne!(verdicts[i], LetterVerdict::Correct);
            }
        }
    }

    #[test]
    fn locked_positions_reject_later_guesses(
        secret in five_letters(),
        first in five_letters(),
        candidate in five_letters(),
    ) {
        let secret = Word::new(&secret).unwrap();
        let first = Word::new(&first).unwrap();
        let candidate = Word::new(&candidate).unwrap();
        let feedback = score(&first, &secret);

        let breaks_lock = feedback
            .verdicts()
            .iter()
            .enumerate()
            .any(|(i, &v)| v == LetterVerdict::Correct && candidate.letters()[i] != first.letters()[i]);
        if breaks_lock {
            prop_assert!(validate_hard_mode(&candidate, &[feedback]).is_err());
        }
    }

    #[test]
    fn the_secret_always_satisfies_hard_mode(secret in five_letters(), first in five_letters()) {
        let secret = Word::new(&secret).unwrap();
        let first = Word::new(&first).unwrap();
        let feedback = score(&first, &secret);
        prop_assert!(validate_hard_mode(&secret, &[feedback]).is_ok());
    }
}
