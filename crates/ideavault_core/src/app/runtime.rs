//! Runtime shell around the pure update function.
//!
//! # Responsibility
//! - Load the store once at startup.
//! - Feed actions through `update` and execute the resulting effects.
//! - Convert effect failures into inline errors.
//!
//! # Invariants
//! - A failed save never rolls back in-memory state.
//! - Only metadata (domain, lengths, codes) is logged, never idea text.

use crate::app::page::{render_page, Page};
use crate::app::state::{AppState, PUBLISH_FAILED_MESSAGE, SAVE_FAILED_MESSAGE};
use crate::app::update::{update, Action, Effect};
use crate::app::viewer::{view, ViewerPanel};
use crate::model::domain::Domain;
use crate::model::idea::{Idea, ValidationError};
use crate::storage::idea_storage::{load_or_empty, IdeaStorage};
use crate::sync::remote::RemoteIdeaService;
use chrono::Datelike;
use log::{error, info, warn};
use std::sync::Arc;

/// One idea vault session over a storage backend.
pub struct IdeaVault<S: IdeaStorage> {
    state: AppState,
    storage: S,
    remote: Option<Arc<dyn RemoteIdeaService>>,
}

impl<S: IdeaStorage> IdeaVault<S> {
    /// Opens a session, reading the persisted store best-effort.
    pub fn open(storage: S) -> Self {
        let store = load_or_empty(&storage);
        info!(
            "event=vault_open module=app status=ok ideas={} domains={}",
            store.total(),
            store.domains().count()
        );
        Self {
            state: AppState::with_store(store),
            storage,
            remote: None,
        }
    }

    /// Attaches a remote service that receives every accepted idea.
    pub fn with_remote(mut self, remote: Arc<dyn RemoteIdeaService>) -> Self {
        info!(
            "event=remote_attach module=app status=ok service_id={}",
            remote.service_id()
        );
        self.remote = Some(remote);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Applies one action and runs its effects.
    ///
    /// # Errors
    /// - Returns the validation error of a rejected submit. The same message
    ///   is already set as the inline error.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ValidationError> {
        let transition = update(std::mem::take(&mut self.state), action);
        self.state = transition.state;

        if let Some(rejection) = transition.rejection {
            info!(
                "event=idea_submit module=app status=rejected error_code={}",
                rejection.code()
            );
            return Err(rejection);
        }

        for effect in transition.effects {
            self.run_effect(effect);
        }
        Ok(())
    }

    pub fn select_form_domain(&mut self, domain: Option<Domain>) {
        self.apply(Action::SelectFormDomain(domain));
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.apply(Action::EditDraft(text.into()));
    }

    pub fn select_viewing_domain(&mut self, domain: Option<Domain>) {
        self.apply(Action::SelectViewingDomain(domain));
    }

    pub fn dismiss_confirmation(&mut self) {
        self.apply(Action::DismissConfirmation);
    }

    /// Fills the form with `domain` + `text` and submits it.
    pub fn submit(&mut self, domain: Option<Domain>, text: &str) -> Result<(), ValidationError> {
        self.select_form_domain(domain);
        self.edit_draft(text);
        self.dispatch(Action::Submit)
    }

    /// Viewer projection for any domain, independent of the selected one.
    pub fn view(&self, domain: Option<Domain>) -> ViewerPanel {
        view(&self.state.store, domain)
    }

    /// Page snapshot with the current local year in the footer.
    pub fn page(&self) -> Page {
        self.page_for_year(chrono::Local::now().year())
    }

    pub fn page_for_year(&self, year: i32) -> Page {
        render_page(&self.state, year)
    }

    /// Dispatches an action that cannot be rejected.
    fn apply(&mut self, action: Action) {
        debug_assert!(!matches!(action, Action::Submit));
        let outcome = self.dispatch(action);
        debug_assert!(outcome.is_ok());
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistStore => self.persist(),
            Effect::PublishIdea { domain, idea } => self.publish(domain, &idea),
        }
    }

    fn persist(&mut self) {
        match self.storage.save(&self.state.store) {
            Ok(()) => {
                info!(
                    "event=store_save module=app status=ok ideas={}",
                    self.state.store.total()
                );
            }
            Err(err) => {
                error!(
                    "event=store_save module=app status=error error_code={} error={}",
                    err.code(),
                    err
                );
                self.show_error(SAVE_FAILED_MESSAGE);
            }
        }
    }

    fn publish(&mut self, domain: Domain, idea: &Idea) {
        info!(
            "event=idea_submit module=app status=ok domain={} chars={}",
            domain.as_str(),
            idea.as_str().chars().count()
        );
        let Some(remote) = self.remote.clone() else {
            return;
        };

        match remote.submit_idea(domain, idea) {
            Ok(()) => {
                info!(
                    "event=idea_publish module=app status=ok service_id={} domain={}",
                    remote.service_id(),
                    domain.as_str()
                );
            }
            Err(err) => {
                warn!(
                    "event=idea_publish module=app status=error service_id={} error_code={} retryable={}",
                    err.service_id, err.code, err.retryable
                );
                // A storage failure in the same submit takes precedence.
                if self.state.error_message.is_none() {
                    self.show_error(PUBLISH_FAILED_MESSAGE);
                }
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        self.apply(Action::ShowError(message.to_string()));
    }
}
