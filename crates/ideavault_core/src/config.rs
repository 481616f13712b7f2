//! Session configuration.
//!
//! # Responsibility
//! - Resolve the database path and storage key from the environment.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - The resolved storage key is never blank.

use crate::storage::idea_storage::{KeyValueIdeaStorage, DEFAULT_STORAGE_KEY};
use crate::storage::kv_store::SqliteKeyValueStore;
use crate::storage::StorageResult;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable overriding the database file path.
pub const DB_PATH_ENV: &str = "IDEAVAULT_DB_PATH";
/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "IDEAVAULT_STORAGE_KEY";
/// Database file name used under the temp directory by default.
pub const DEFAULT_DB_FILE_NAME: &str = "ideavault.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyStorageKey,
    EmptyDbPath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStorageKey => write!(f, "storage key cannot be empty"),
            Self::EmptyDbPath => write!(f, "database path cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl VaultConfig {
    /// Builds a config from explicit values.
    ///
    /// # Errors
    /// - Rejects a blank database path or storage key.
    pub fn new(db_path: impl Into<PathBuf>, storage_key: &str) -> Result<Self, ConfigError> {
        let db_path = db_path.into();
        if db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        let storage_key = storage_key.trim();
        if storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(Self {
            db_path,
            storage_key: storage_key.to_string(),
        })
    }

    /// Resolves config from `IDEAVAULT_DB_PATH` / `IDEAVAULT_STORAGE_KEY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Opens the SQLite-backed idea storage this config points at.
    pub fn open_storage(&self) -> StorageResult<KeyValueIdeaStorage<SqliteKeyValueStore>> {
        let backend = SqliteKeyValueStore::open(&self.db_path)?;
        Ok(KeyValueIdeaStorage::new(backend, self.storage_key.clone()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            storage_key: non_blank(STORAGE_KEY_ENV).unwrap_or(defaults.storage_key),
        }
    }
}
