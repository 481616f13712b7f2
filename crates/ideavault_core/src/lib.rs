//! Core logic for IdeaVault.
//! This crate is the single source of truth for submission rules and
//! persistence behavior; hosts only forward user actions.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod sync;

pub use app::page::{plain_text, render_page, Footer, FormSection, GuidelineBox, Page, ViewerSection};
pub use app::runtime::IdeaVault;
pub use app::state::{AppState, ConfirmationModal, SUBMITTED_MESSAGE, SUPPORT_EMAIL};
pub use app::update::{update, validate_submission, Action, Effect, Transition};
pub use app::viewer::{view, IdeaItem, ViewerPanel};
pub use config::{ConfigError, VaultConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::domain::{Domain, DomainGuideline};
pub use model::idea::{Idea, ValidationError};
pub use model::idea_store::IdeaStore;
pub use storage::idea_storage::{
    load_or_empty, IdeaStorage, KeyValueIdeaStorage, DEFAULT_STORAGE_KEY,
};
pub use storage::kv_store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use storage::{StorageError, StorageResult};
pub use sync::remote::{RemoteError, RemoteIdeaService, RemoteResult};

/// SQLite-backed storage used by the shipped hosts.
pub type SqliteIdeaStorage = KeyValueIdeaStorage<SqliteKeyValueStore>;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
