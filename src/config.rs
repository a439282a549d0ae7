//! Configuration for the store and the draft session.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock behavior: 50 history entries, `history` and `favorites` slots in
//! JSON, and an 800 ms commit debounce for names of at least three
//! characters.
//!
//! ```toml
//! [store]
//! history_capacity = 100
//! format = "binary"
//!
//! [draft]
//! debounce_ms = 500
//! ```

use crate::store::{SlotFormat, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub draft: DraftConfig,
}

/// History store settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum number of history entries kept
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Slot name for history
    #[serde(default = "default_history_key")]
    pub history_key: String,

    /// Slot name for favorites
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,

    /// Encoding used for both slots
    #[serde(default)]
    pub format: SlotFormat,
}

/// Live-typing commit settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Quiet period after the last edit before a draft is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Shortest input considered for commit
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            history_key: default_history_key(),
            favorites_key: default_favorites_key(),
            format: SlotFormat::default(),
        }
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_length: default_min_length(),
        }
    }
}

impl DraftConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_history_key() -> String {
    "history".to_string()
}

fn default_favorites_key() -> String {
    "favorites".to_string()
}

fn default_debounce_ms() -> u64 {
    800
}

fn default_min_length() -> usize {
    3
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from the platform config directory, or use defaults if no file
    /// exists there.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Per-user config file location, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "namecloak", "namecloak")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn sanitized(mut self) -> Self {
        self.store = self.store.sanitized();
        self
    }
}

impl StoreConfig {
    /// Replace a zero history capacity with the default.
    pub fn sanitized(mut self) -> Self {
        if self.history_capacity == 0 {
            warn!(
                default = DEFAULT_HISTORY_CAPACITY,
                "history_capacity of 0 is not allowed, using default"
            );
            self.history_capacity = DEFAULT_HISTORY_CAPACITY;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store.history_capacity, 50);
        assert_eq!(config.store.history_key, "history");
        assert_eq!(config.store.favorites_key, "favorites");
        assert_eq!(config.store.format, SlotFormat::Json);
        assert_eq!(config.draft.debounce(), Duration::from_millis(800));
        assert_eq!(config.draft.min_length, 3);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [store]
            history_capacity = 10
            format = "binary"

            [draft]
            debounce_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.store.history_capacity, 10);
        assert_eq!(config.store.format, SlotFormat::Binary);
        assert_eq!(config.store.history_key, "history");
        assert_eq!(config.draft.debounce_ms, 250);
        assert_eq!(config.draft.min_length, 3);
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let config = Config::from_toml_str("[store]\nhistory_capacity = 0\n").unwrap();
        assert_eq!(config.store.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let err = Config::from_toml_str("[store]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[draft]\nmin_length = 5\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.draft.min_length, 5);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
