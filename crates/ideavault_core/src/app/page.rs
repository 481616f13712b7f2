//! Page model consumed by UI hosts.
//!
//! # Responsibility
//! - Project `AppState` into the submit section, viewer section, footer
//!   and modal overlay.
//! - Provide a plain-text form of inline-emphasized copy for terminals.

use crate::app::state::{AppState, ConfirmationModal, SPAM_WARNING_NOTE, SUPPORT_EMAIL};
use crate::app::viewer::{view, ViewerPanel};
use crate::model::domain::Domain;
use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid emphasis regex"));

/// Guideline box rendered under a domain picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineBox {
    pub heading: String,
    pub description: String,
}

impl GuidelineBox {
    fn for_form(domain: Domain) -> Self {
        let guideline = domain.guideline();
        Self {
            heading: format!("{} Guidelines:", guideline.title),
            description: guideline.description.to_string(),
        }
    }

    fn for_viewer(domain: Domain) -> Self {
        let guideline = domain.guideline();
        Self {
            heading: format!("{} Ideas:", guideline.title),
            description: guideline.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSection {
    pub domain_options: Vec<Domain>,
    pub selected_domain: Option<Domain>,
    pub guideline: Option<GuidelineBox>,
    pub draft: String,
    pub error_message: Option<String>,
    pub warning_note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSection {
    pub domain_options: Vec<Domain>,
    pub selected_domain: Option<Domain>,
    pub guideline: Option<GuidelineBox>,
    pub panel: ViewerPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub copyright: String,
    pub contact: String,
}

impl Footer {
    pub fn for_year(year: i32) -> Self {
        Self {
            copyright: format!("© {year} IdeaVault. All rights reserved."),
            contact: format!("Contact Us: {SUPPORT_EMAIL}"),
        }
    }
}

/// Full page snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub form: FormSection,
    pub viewer: ViewerSection,
    pub footer: Footer,
    pub modal: ConfirmationModal,
}

pub const PAGE_TITLE: &str = "💡 Research/Project Idea Vault";

/// Builds the page for `state`; `year` feeds the footer.
pub fn render_page(state: &AppState, year: i32) -> Page {
    Page {
        title: PAGE_TITLE,
        form: FormSection {
            domain_options: Domain::ALL.to_vec(),
            selected_domain: state.form_domain,
            guideline: state.form_domain.map(GuidelineBox::for_form),
            draft: state.draft.clone(),
            error_message: state.error_message.clone(),
            warning_note: SPAM_WARNING_NOTE,
        },
        viewer: ViewerSection {
            domain_options: Domain::ALL.to_vec(),
            selected_domain: state.viewing_domain,
            guideline: state.viewing_domain.map(GuidelineBox::for_viewer),
            panel: view(&state.store, state.viewing_domain),
        },
        footer: Footer::for_year(year),
        modal: state.confirmation.clone(),
    }
}

/// Removes `**emphasis**` markers, keeping the inner text.
pub fn plain_text(value: &str) -> String {
    EMPHASIS_RE.replace_all(value, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{plain_text, render_page};
    use crate::app::state::{AppState, SUBMITTED_MESSAGE};
    use crate::model::domain::Domain;

    #[test]
    fn plain_text_strips_emphasis_markers() {
        let text = plain_text(SUBMITTED_MESSAGE);
        assert!(!text.contains("**"));
        assert!(text.contains("For urgent requests, any further issues, or general inquiries"));
        assert_eq!(plain_text("a * b"), "a * b");
    }

    #[test]
    fn guideline_headings_differ_per_section() {
        let state = AppState {
            form_domain: Some(Domain::Art),
            viewing_domain: Some(Domain::Startup),
            ..AppState::default()
        };
        let page = render_page(&state, 2026);

        assert_eq!(
            page.form.guideline.unwrap().heading,
            "Artistic Concepts Guidelines:"
        );
        assert_eq!(page.viewer.guideline.unwrap().heading, "Startup Ventures Ideas:");
        assert_eq!(page.footer.copyright, "© 2026 IdeaVault. All rights reserved.");
        assert_eq!(page.footer.contact, "Contact Us: support@ideavault.com");
    }

    #[test]
    fn no_selection_hides_guidelines() {
        let page = render_page(&AppState::default(), 2026);
        assert!(page.form.guideline.is_none());
        assert!(page.viewer.guideline.is_none());
        assert_eq!(page.form.domain_options.len(), 6);
        assert!(!page.modal.visible);
    }
}
