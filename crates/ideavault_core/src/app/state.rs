//! Application state for the idea vault page.
//!
//! # Invariants
//! - The form selection and the viewing selection are independent fields.
//! - At most one inline error and at most one confirmation modal exist.

use crate::model::domain::Domain;
use crate::model::idea_store::IdeaStore;

/// Support contact shown in the confirmation modal and the footer.
pub const SUPPORT_EMAIL: &str = "support@ideavault.com";

/// Confirmation text shown after a successful submit.
pub const SUBMITTED_MESSAGE: &str = "⚠️ Idea submitted! Once submitted, ideas cannot be edited. \
For **urgent requests**, any **further issues**, or **general inquiries**, \
please contact us at: support@ideavault.com";

/// Inline message shown when the persistence mirror fails to write.
pub const SAVE_FAILED_MESSAGE: &str =
    "Failed to save ideas. Your browser's storage might be full.";

/// Inline message shown when publishing to an attached remote service fails.
pub const PUBLISH_FAILED_MESSAGE: &str = "Failed to send idea to the remote service.";

/// Static anti-spam note rendered under the submit form.
pub const SPAM_WARNING_NOTE: &str = "**Note:** Spamming or submitting inappropriate content is \
strictly prohibited and may result in warnings or removal.";

/// Dismissible confirmation overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationModal {
    pub visible: bool,
    pub message: String,
}

impl ConfirmationModal {
    pub fn shown(message: impl Into<String>) -> Self {
        Self {
            visible: true,
            message: message.into(),
        }
    }
}

/// Whole UI state, transformed only by `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub store: IdeaStore,
    /// Domain picked in the submit form.
    pub form_domain: Option<Domain>,
    /// Raw, untrimmed draft text.
    pub draft: String,
    pub viewing_domain: Option<Domain>,
    pub error_message: Option<String>,
    pub confirmation: ConfirmationModal,
}

impl AppState {
    /// Initial state around a store loaded at startup.
    pub fn with_store(store: IdeaStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }
}
