//! Word pool entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned at insertion; ascending ids give the pool's stable order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate secret word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub word: String,
    /// Eligible at all
    pub active: bool,
    /// Already served as a past daily word
    pub used: bool,
}

impl WordEntry {
    #[must_use]
    pub fn new(id: WordId, word: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            active: true,
            used: false,
        }
    }

    /// Active and not yet used
    #[inline]
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.active && !self.used
    }
}

/// Usage counters over the active entries of a pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsageStats {
    pub total: usize,
    pub used: usize,
    pub available: usize,
}

impl UsageStats {
    #[must_use]
    pub fn from_entries(entries: &[WordEntry]) -> Self {
        let total = entries.iter().filter(|e| e.active).count();
        let used = entries.iter().filter(|e| e.active && e.used).count();
        Self {
            total,
            used,
            available: total - used,
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.available == 0
    }
}
