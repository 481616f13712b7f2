//! Read-only projection of stored ideas for one viewing domain.

use crate::model::domain::Domain;
use crate::model::idea_store::IdeaStore;

/// Prompt shown while no viewing domain is selected.
pub const SELECT_DOMAIN_PROMPT: &str = "Please select a domain to view registered ideas.";

/// One rendered idea. `index` is its position in the domain sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaItem {
    pub index: usize,
    pub text: String,
}

/// What the viewer section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerPanel {
    NoDomainSelected { prompt: String },
    Empty { domain: Domain, message: String },
    Ideas { domain: Domain, items: Vec<IdeaItem> },
}

impl ViewerPanel {
    /// Rendered ideas; empty for the prompt and empty-domain panels.
    pub fn items(&self) -> &[IdeaItem] {
        match self {
            Self::Ideas { items, .. } => items,
            Self::NoDomainSelected { .. } | Self::Empty { .. } => &[],
        }
    }

    /// Status line for panels that carry no ideas.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NoDomainSelected { prompt } => Some(prompt),
            Self::Empty { message, .. } => Some(message),
            Self::Ideas { .. } => None,
        }
    }
}

pub fn no_ideas_message(domain: Domain) -> String {
    format!("No ideas registered for the \"{domain}\" domain yet.")
}

/// Projects `store` for `domain`.
pub fn view(store: &IdeaStore, domain: Option<Domain>) -> ViewerPanel {
    let Some(domain) = domain else {
        return ViewerPanel::NoDomainSelected {
            prompt: SELECT_DOMAIN_PROMPT.to_string(),
        };
    };

    let texts = store.texts(domain);
    if texts.is_empty() {
        return ViewerPanel::Empty {
            domain,
            message: no_ideas_message(domain),
        };
    }

    ViewerPanel::Ideas {
        domain,
        items: texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| IdeaItem {
                index,
                text: text.into_owned(),
            })
            .collect(),
    }
}
