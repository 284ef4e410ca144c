//! Bulk import of candidate verbs

use super::entry::WordId;
use super::repository::{StoreError, WordRepository};
use crate::core::{Word, WordError};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

/// Why a word was refused by the pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerbError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("\"{0}\" does not end in -ar, -er, -ir or -or")]
    NotAVerb(String),
}

/// Check that `text` is a 5-letter infinitive and return its pool form
///
/// # Errors
/// Returns `VerbError` when the text is not a valid word or does not look
/// like an infinitive.
pub fn validate_verb(text: &str) -> Result<String, VerbError> {
    let word = Word::new(text)?;
    if !word.is_verb_shaped() {
        return Err(VerbError::NotAVerb(word.lowercase()));
    }
    Ok(word.lowercase())
}

/// What an import did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub added: Vec<(WordId, String)>,
    pub duplicates: Vec<String>,
    pub invalid: Vec<(String, String)>,
}

impl ImportReport {
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// Insert every valid, new verb from `words` into the pool
///
/// Blank lines are ignored. Invalid words and words already present are
/// recorded in the report instead of failing the whole import.
///
/// # Errors
/// Returns `StoreError` if the repository cannot be updated.
pub fn import_words<R, I, S>(repo: &R, words: I) -> Result<ImportReport, StoreError>
where
    R: WordRepository + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ImportReport::default();

    for raw in words {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }

        match validate_verb(raw) {
            Ok(word) => match repo.insert(&word)? {
                Some(id) => {
                    debug!("imported {word} as #{id}");
                    report.added.push((id, word));
                }
                None => report.duplicates.push(word),
            },
            Err(e) => {
                debug!("rejected {raw}: {e}");
                report.invalid.push((raw.to_string(), e.to_string()));
            }
        }
    }

    info!(
        "import finished: {} added, {} duplicates, {} invalid",
        report.added.len(),
        report.duplicates.len(),
        report.invalid.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::MemoryRepository;

    #[test]
    fn validate_verb_normalizes_case() {
        assert_eq!(validate_verb(" ABRIR "), Ok("abrir".to_string()));
        assert_eq!(validate_verb("Pôr-se").map_err(|_| ()), Err(()));
    }

    #[test]
    fn validate_verb_rejects_non_infinitives() {
        assert_eq!(
            validate_verb("casas"),
            Err(VerbError::NotAVerb("casas".to_string()))
        );
        assert!(matches!(
            validate_verb("correr"),
            Err(VerbError::InvalidWord(WordError::InvalidLength(6)))
        ));
    }

    #[test]
    fn import_reports_every_word() {
        let repo = MemoryRepository::from_words(["abrir"]);
        let report =
            import_words(&repo, ["comer", "", "abrir", "casas", "Comer", "ir", "viver"]).unwrap();

        let added: Vec<&str> = report.added.iter().map(|(_, w)| w.as_str()).collect();
        assert_eq!(added, ["comer", "viver"]);
        assert_eq!(report.duplicates, ["abrir", "comer"]);
        assert_eq!(report.invalid.len(), 2);
        assert_eq!(report.invalid[0].0, "casas");
        assert_eq!(report.invalid[1].0, "ir");
        assert_eq!(repo.entries().unwrap().len(), 3);
    }
}
