//! Accepted guesses
//!
//! A guess must be either a verb from the pool or one of the common words.
//! Lookups ignore case and accents, so `SÁBIO`, `sabio` and `sábio` are the
//! same word.

use super::{COMMON_WORDS, VERBS};
use crate::core::{Word, WordError, normalize};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which list a word was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    Verb,
    Common,
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verb => f.write_str("verb"),
            Self::Common => f.write_str("common"),
        }
    }
}

/// Why an attempt was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("word not found: {0}")]
    WordNotFound(String),
}

impl AttemptError {
    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidWord(WordError::Empty) => "WORD_EMPTY",
            Self::InvalidWord(WordError::InvalidLength(_)) => "WORD_INVALID_LENGTH",
            Self::InvalidWord(WordError::InvalidCharacters) => "WORD_INVALID_CHARACTERS",
            Self::WordNotFound(_) => "WORD_NOT_FOUND",
        }
    }
}

/// Set of words accepted as guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    verbs: FxHashSet<String>,
    common: FxHashSet<String>,
}

impl Dictionary {
    /// Build from explicit lists
    #[must_use]
    pub fn from_lists<V, C>(verbs: V, common: C) -> Self
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            verbs: verbs.into_iter().map(|w| normalize(w.as_ref())).collect(),
            common: common.into_iter().map(|w| normalize(w.as_ref())).collect(),
        }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(VERBS.iter(), COMMON_WORDS.iter())
    }

    /// Also accept `verbs` (typically the current pool) as verbs
    #[must_use]
    pub fn with_verbs<I>(mut self, verbs: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.verbs
            .extend(verbs.into_iter().map(|w| normalize(w.as_ref())));
        self
    }

    /// Find a word, checking verbs first
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<WordKind> {
        let key = normalize(word);
        if self.verbs.contains(&key) {
            Some(WordKind::Verb)
        } else if self.common.contains(&key) {
            Some(WordKind::Common)
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Validate the format of `text`, then look it up
    ///
    /// # Errors
    /// Returns `AttemptError::InvalidWord` for malformed input and
    /// `AttemptError::WordNotFound` for well-formed words in neither list.
    pub fn validate_attempt(&self, text: &str) -> Result<(Word, WordKind), AttemptError> {
        let word = Word::new(text)?;
        match self.lookup(word.text()) {
            Some(kind) => Ok((word, kind)),
            None => Err(AttemptError::WordNotFound(word.lowercase())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.verbs.len() + self.common.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty() && self.common.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::from_lists(["abrir", "comer"], ["sábio", "casas", "comer"])
    }

    #[test]
    fn verbs_take_precedence() {
        let dict = small();
        assert_eq!(dict.lookup("comer"), Some(WordKind::Verb));
        assert_eq!(dict.lookup("casas"), Some(WordKind::Common));
        assert_eq!(dict.lookup("zebra"), None);
    }

    #[test]
    fn lookup_ignores_case_and_accents() {
        let dict = small();
        assert_eq!(dict.lookup("SABIO"), Some(WordKind::Common));
        assert_eq!(dict.lookup("sábio"), Some(WordKind::Common));
        assert_eq!(dict.lookup(" Abrír "), Some(WordKind::Verb));
    }

    #[test]
    fn validate_attempt_checks_format_first() {
        let dict = small();
        assert_eq!(
            dict.validate_attempt("abc").unwrap_err(),
            AttemptError::InvalidWord(WordError::InvalidLength(3))
        );
        assert_eq!(dict.validate_attempt("").unwrap_err().code(), "WORD_EMPTY");

        let err = dict.validate_attempt("Zebra").unwrap_err();
        assert_eq!(err, AttemptError::WordNotFound("zebra".to_string()));
        assert_eq!(err.code(), "WORD_NOT_FOUND");

        let (word, kind) = dict.validate_attempt("ABRIR").unwrap();
        assert_eq!(word.text(), "ABRIR");
        assert_eq!(kind, WordKind::Verb);
    }

    #[test]
    fn with_verbs_extends_the_verb_list() {
        let dict = small().with_verbs(["viver"]);
        assert_eq!(dict.lookup("viver"), Some(WordKind::Verb));
    }

    #[test]
    fn embedded_dictionary_knows_seed_words() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert_eq!(dict.lookup("andar"), Some(WordKind::Verb));
        for &word in COMMON_WORDS {
            assert!(dict.contains(word), "{word} missing");
        }
    }
}
