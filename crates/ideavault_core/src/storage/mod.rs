//! Storage adapters behind the persistence mirror.
//!
//! # Responsibility
//! - Define the key-value slot contract (`KeyValueStore`) and its backends.
//! - Define the store-level contract (`IdeaStorage`) used by the runtime.
//!
//! # Invariants
//! - Writes replace the whole value under one key; no partial writes.
//! - Storage failures are values, never panics.

pub mod idea_storage;
pub mod kv_store;
pub mod schema;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failure on read or write.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// The database file was stamped by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    QuotaExceeded { limit_bytes: usize, required_bytes: usize },
    Unavailable(String),
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl StorageError {
    /// Stable error code for logs and host envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "storage_sqlite_failed",
            Self::SchemaTooNew { .. } => "storage_schema_too_new",
            Self::QuotaExceeded { .. } => "storage_quota_exceeded",
            Self::Unavailable(_) => "storage_unavailable",
            Self::Encode(_) => "storage_encode_failed",
            Self::Decode(_) => "storage_decode_failed",
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "key-value schema version {found} is newer than supported {supported}"
            ),
            Self::QuotaExceeded {
                limit_bytes,
                required_bytes,
            } => write!(
                f,
                "storage quota exceeded: {required_bytes} bytes required, limit is {limit_bytes}"
            ),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::Encode(err) => write!(f, "failed to encode idea store: {err}"),
            Self::Decode(err) => write!(f, "failed to decode idea store: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::QuotaExceeded { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
