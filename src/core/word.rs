//! Verbo word representation
//!
//! A Word stores a 5-letter Portuguese word twice: as the player typed it (for
//! display) and lower-cased (for comparison).

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Every guess and every secret has exactly this many letters
pub const WORD_LENGTH: usize = 5;

/// Suffixes a pool entry must end with to count as an infinitive
pub const VERB_SUFFIXES: [&str; 4] = ["ar", "er", "ir", "or"];

/// A 5-letter word with its original casing preserved
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    display: [char; WORD_LENGTH],
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored. Accented Portuguese letters are
    /// accepted as-is; they are only folded for dictionary lookups.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty, is not exactly 5
    /// characters long, or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use verbo::core::Word;
    ///
    /// let word = Word::new("Ficar").unwrap();
    /// assert_eq!(word.text(), "Ficar");
    /// assert_eq!(word.lowercase(), "ficar");
    ///
    /// assert!(Word::new("correr!").is_err());
    /// assert!(Word::new("pôr").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if !chars.iter().all(|&c| is_letter(c)) {
            return Err(WordError::InvalidCharacters);
        }

        let mut display = [' '; WORD_LENGTH];
        let mut letters = [' '; WORD_LENGTH];
        for (i, &c) in chars.iter().enumerate() {
            display[i] = c;
            letters[i] = to_lower(c);
        }

        Ok(Self {
            text: text.to_string(),
            display,
            letters,
        })
    }

    /// The word exactly as it was entered (trimmed)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased letters, used for every comparison
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Letters with their original casing and accents
    #[inline]
    #[must_use]
    pub const fn display_letters(&self) -> &[char; WORD_LENGTH] {
        &self.display
    }

    /// Lower-cased letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a letter (case-insensitive)
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        let letter = to_lower(letter);
        self.letters.contains(&letter)
    }

    /// The lower-cased word
    #[must_use]
    pub fn lowercase(&self) -> String {
        self.letters.iter().collect()
    }

    /// The lower-cased word with diacritics removed (`sábio` → `sabio`)
    #[must_use]
    pub fn folded(&self) -> String {
        self.letters.iter().map(|&c| fold_accent(c)).collect()
    }

    /// Whether the word ends like a Portuguese infinitive
    #[must_use]
    pub fn is_verb_shaped(&self) -> bool {
        let folded = self.folded();
        VERB_SUFFIXES.iter().any(|suffix| folded.ends_with(suffix))
    }

    /// Count of each lower-cased letter
    ///
    /// Used for duplicate-letter accounting while scoring.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Letters accepted in a word: ASCII letters plus the Latin-1 and Latin
/// Extended-A letters (U+00C0..=U+017F) used by Portuguese.
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{C0}'..='\u{17F}').contains(&c) && c != '×' && c != '÷')
}

/// Lower-case a single character, keeping it unchanged when the lowercase
/// form is not a single character.
#[must_use]
pub fn to_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Strip the diacritic from a lower-case Portuguese letter
#[must_use]
pub const fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Lower-case and strip diacritics from arbitrary text
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().chars().map(|c| fold_accent(to_lower(c))).collect()
}
