//! Runtime configuration
//!
//! Values come from command-line flags with environment variable fallbacks
//! (see the binary); this module holds the resolved settings and builds the
//! collaborators they describe.

use crate::daily::{DEFAULT_UTC_OFFSET_HOURS, SystemClock};
use crate::game::{DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPTS_LIMIT, SessionOptions};
use crate::pool::JsonFileRepository;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the word pool
pub const DEFAULT_STORE_PATH: &str = "verbo-pool.json";

/// Default location of the player statistics
pub const DEFAULT_STATS_PATH: &str = "verbo-stats.json";

/// File name of the played-words history, next to the statistics
pub const HISTORY_FILE: &str = "verbo-history.json";

/// File name of the saved daily game, next to the statistics
pub const GAME_FILE: &str = "verbo-game.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("UTC offset must be between -23 and 23 hours, got {0}")]
    InvalidOffset(i32),
    #[error("max attempts must be at least 1")]
    NoAttempts,
    #[error("max attempts must be at most {max}, got {got}")]
    TooManyAttempts { got: usize, max: usize },
}

/// Player files: statistics, history and the saved daily game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub stats: PathBuf,
    pub history: PathBuf,
    pub game: PathBuf,
}

impl DataPaths {
    /// History and saved game live in the directory of `stats`
    #[must_use]
    pub fn beside(stats: impl AsRef<Path>) -> Self {
        let stats = stats.as_ref();
        Self {
            stats: stats.to_path_buf(),
            history: stats.with_file_name(HISTORY_FILE),
            game: stats.with_file_name(GAME_FILE),
        }
    }
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub stats_path: PathBuf,
    pub utc_offset_hours: i32,
    pub max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError` for an out-of-range offset or attempt limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidOffset(self.utc_offset_hours));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts {
                got: self.max_attempts,
                max: MAX_ATTEMPTS_LIMIT,
            });
        }
        Ok(())
    }

    /// Wall clock in the configured calendar
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOffset` if the offset is out of range.
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        SystemClock::with_offset_hours(self.utc_offset_hours)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_hours))
    }

    #[must_use]
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::beside(&self.stats_path)
    }

    #[must_use]
    pub fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(&self.store_path)
    }

    #[must_use]
    pub const fn session_options(&self, hard_mode: bool) -> SessionOptions {
        SessionOptions {
            max_attempts: self.max_attempts,
            hard_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::Clock;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.store_path, PathBuf::from("verbo-pool.json"));
        assert_eq!(config.utc_offset_hours, -3);
        assert_eq!(config.max_attempts, 6);
        assert!(config.validate().is_ok());
        assert_eq!(config.clock().unwrap().offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn rejects_bad_values() {
        let config = Config {
            utc_offset_hours: 24,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidOffset(24)));
        assert!(config.clock().is_err());

        let config = Config {
            max_attempts: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoAttempts));

        let config = Config {
            max_attempts: usize::MAX,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyAttempts {
                got: usize::MAX,
                max: MAX_ATTEMPTS_LIMIT
            })
        );
    }

    #[test]
    fn player_files_share_a_directory() {
        let config = Config {
            stats_path: PathBuf::from("/var/lib/verbo/stats.json"),
            ..Config::default()
        };
        let paths = config.data_paths();
        assert_eq!(paths.stats, PathBuf::from("/var/lib/verbo/stats.json"));
        assert_eq!(paths.history, PathBuf::from("/var/lib/verbo/verbo-history.json"));
        assert_eq!(paths.game, PathBuf::from("/var/lib/verbo/verbo-game.json"));

        let local = DataPaths::beside(DEFAULT_STATS_PATH);
        assert_eq!(local.game, PathBuf::from(GAME_FILE));
    }
}
