//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the idea vault page and its user actions to Dart via FRB.
//! - Own the one process-wide session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every action call runs under one session lock, so a submit never
//!   interleaves with another action.

use ideavault_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Action, Domain, IdeaVault, KeyValueIdeaStorage, Page, SqliteIdeaStorage, SqliteKeyValueStore,
    VaultConfig, ViewerPanel,
};
use log::{error, warn};
use std::sync::{Mutex, MutexGuard, OnceLock};

type Session = Option<IdeaVault<SqliteIdeaStorage>>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

const SESSION_UNAVAILABLE: &str = "Idea vault storage could not be opened.";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One domain picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    /// Wire name passed back into action calls.
    pub name: String,
    pub title: String,
    pub description: String,
}

/// Flattened page snapshot for the Dart view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub title: String,
    pub form_domain: Option<String>,
    pub form_guideline_heading: Option<String>,
    pub form_guideline_description: Option<String>,
    pub draft: String,
    pub error_message: Option<String>,
    pub warning_note: String,
    pub viewing_domain: Option<String>,
    pub viewer_guideline_heading: Option<String>,
    pub viewer_guideline_description: Option<String>,
    /// Ideas of the viewing domain in stored order.
    pub ideas: Vec<String>,
    /// Prompt or "no ideas" line; `None` while ideas are listed.
    pub viewer_message: Option<String>,
    pub modal_visible: bool,
    pub modal_message: String,
    pub footer_copyright: String,
    pub footer_contact: String,
}

/// Result envelope for submit calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultActionResponse {
    /// Whether the idea was accepted.
    pub ok: bool,
    /// Inline message after the call; empty when none is shown.
    pub message: String,
    pub page: Option<PageSnapshot>,
}

/// Ideas of one domain, independent of the viewer selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainIdeasResponse {
    pub items: Vec<String>,
    pub message: String,
}

/// Lists the six domains with guideline copy.
#[flutter_rust_bridge::frb(sync)]
pub fn domain_catalog() -> Vec<DomainInfo> {
    Domain::ALL
        .into_iter()
        .map(|domain| {
            let guideline = domain.guideline();
            DomainInfo {
                name: domain.as_str().to_string(),
                title: guideline.title.to_string(),
                description: guideline.description.to_string(),
            }
        })
        .collect()
}

/// Returns the current page, opening the session on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_page() -> Option<PageSnapshot> {
    with_session(|vault| to_page_snapshot(&vault.page()))
}

/// Sets the submit form domain. Blank or unknown names clear the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_select_form_domain(domain: String) -> Option<PageSnapshot> {
    with_session(|vault| {
        vault.select_form_domain(Domain::parse(&domain));
        to_page_snapshot(&vault.page())
    })
}

/// Replaces the draft text.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_edit_draft(text: String) -> Option<PageSnapshot> {
    with_session(|vault| {
        vault.edit_draft(text);
        to_page_snapshot(&vault.page())
    })
}

/// Sets the viewer domain. Blank or unknown names clear the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_select_viewing_domain(domain: String) -> Option<PageSnapshot> {
    with_session(|vault| {
        vault.select_viewing_domain(Domain::parse(&domain));
        to_page_snapshot(&vault.page())
    })
}

/// Closes the confirmation modal.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_dismiss_confirmation() -> Option<PageSnapshot> {
    with_session(|vault| {
        vault.dismiss_confirmation();
        to_page_snapshot(&vault.page())
    })
}

/// Submits the current form state.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_submit() -> VaultActionResponse {
    respond_to_submit(|vault| vault.dispatch(Action::Submit).is_ok())
}

/// Fills the form and submits it in one call.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_submit_idea(domain: String, text: String) -> VaultActionResponse {
    respond_to_submit(|vault| vault.submit(Domain::parse(&domain), &text).is_ok())
}

/// Lists ideas stored for `domain`.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_list_ideas(domain: String) -> DomainIdeasResponse {
    let panel = with_session(|vault| vault.view(Domain::parse(&domain)));
    match panel {
        Some(panel) => DomainIdeasResponse {
            items: panel.items().iter().map(|item| item.text.clone()).collect(),
            message: panel.message().unwrap_or_default().to_string(),
        },
        None => DomainIdeasResponse {
            items: Vec::new(),
            message: SESSION_UNAVAILABLE.to_string(),
        },
    }
}

fn respond_to_submit(
    submit: impl FnOnce(&mut IdeaVault<SqliteIdeaStorage>) -> bool,
) -> VaultActionResponse {
    let response = with_session(|vault| {
        let accepted = submit(vault);
        VaultActionResponse {
            ok: accepted,
            message: vault.state().error_message.clone().unwrap_or_default(),
            page: Some(to_page_snapshot(&vault.page())),
        }
    });
    response.unwrap_or_else(unavailable_response)
}

fn unavailable_response() -> VaultActionResponse {
    VaultActionResponse {
        ok: false,
        message: SESSION_UNAVAILABLE.to_string(),
        page: None,
    }
}

fn with_session<T>(f: impl FnOnce(&mut IdeaVault<SqliteIdeaStorage>) -> T) -> Option<T> {
    let mut guard = lock_session();
    guard.as_mut().map(f)
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| Mutex::new(open_session()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn open_session() -> Session {
    let config = VaultConfig::from_env();
    match config.open_storage() {
        Ok(storage) => Some(IdeaVault::open(storage)),
        Err(err) => {
            // Keep the page usable; only durability is lost.
            warn!(
                "event=session_open module=ffi status=fallback mode=memory error_code={} error={}",
                err.code(),
                err
            );
            match SqliteKeyValueStore::open_in_memory() {
                Ok(backend) => Some(IdeaVault::open(KeyValueIdeaStorage::new(
                    backend,
                    config.storage_key,
                ))),
                Err(err) => {
                    error!(
                        "event=session_open module=ffi status=error error_code={} error={}",
                        err.code(),
                        err
                    );
                    None
                }
            }
        }
    }
}

fn to_page_snapshot(page: &Page) -> PageSnapshot {
    let domain_name = |domain: Option<Domain>| domain.map(|d| d.as_str().to_string());
    PageSnapshot {
        title: page.title.to_string(),
        form_domain: domain_name(page.form.selected_domain),
        form_guideline_heading: page.form.guideline.as_ref().map(|g| g.heading.clone()),
        form_guideline_description: page.form.guideline.as_ref().map(|g| g.description.clone()),
        draft: page.form.draft.clone(),
        error_message: page.form.error_message.clone(),
        warning_note: page.form.warning_note.to_string(),
        viewing_domain: domain_name(page.viewer.selected_domain),
        viewer_guideline_heading: page.viewer.guideline.as_ref().map(|g| g.heading.clone()),
        viewer_guideline_description: page
            .viewer
            .guideline
            .as_ref()
            .map(|g| g.description.clone()),
        ideas: viewer_texts(&page.viewer.panel),
        viewer_message: page.viewer.panel.message().map(str::to_string),
        modal_visible: page.modal.visible,
        modal_message: page.modal.message.clone(),
        footer_copyright: page.footer.copyright.clone(),
        footer_contact: page.footer.contact.clone(),
    }
}

fn viewer_texts(panel: &ViewerPanel) -> Vec<String> {
    panel.items().iter().map(|item| item.text.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, domain_catalog, init_logging, ping, vault_list_ideas, vault_page,
        vault_submit_idea,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn domain_catalog_lists_six_domains_in_picker_order() {
        let catalog = domain_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].name, "Product");
        assert_eq!(catalog[5].name, "Environment related");
        assert_eq!(catalog[2].title, "Artistic Concepts");
    }

    #[test]
    fn submit_idea_is_listed_for_its_domain() {
        let token = unique_token("ffi-submit");
        let response = vault_submit_idea("Startup".to_string(), format!("  {token}  "));
        assert!(response.ok, "{}", response.message);

        let page = response.page.expect("page snapshot after submit");
        assert!(page.modal_visible);
        assert_eq!(page.viewing_domain.as_deref(), Some("Startup"));

        let listed = vault_list_ideas("Startup".to_string());
        assert_eq!(listed.items.iter().filter(|item| **item == token).count(), 1);
    }

    #[test]
    fn submit_without_domain_is_rejected_with_inline_message() {
        let response = vault_submit_idea(String::new(), unique_token("ffi-rejected"));
        assert!(!response.ok);
        assert_eq!(
            response.message,
            "Please select a domain before submitting your idea."
        );
    }

    #[test]
    fn unknown_domain_lists_prompt() {
        let listed = vault_list_ideas("Music".to_string());
        assert!(listed.items.is_empty());
        assert_eq!(
            listed.message,
            "Please select a domain to view registered ideas."
        );
    }

    #[test]
    fn page_snapshot_carries_static_copy() {
        let page = vault_page().expect("session should open");
        assert_eq!(page.footer_contact, "Contact Us: support@ideavault.com");
        assert!(page.warning_note.contains("Spamming"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
