//! Pure state transitions.
//!
//! # Responsibility
//! - Map every user action to the next `AppState` plus side effects.
//! - Own the submit validation order.
//!
//! # Invariants
//! - `update` performs no I/O; effects are executed by the runtime.
//! - A rejected submit leaves the store untouched and emits no effect.
//! - Every store change emits exactly one `Effect::PersistStore`.

use crate::app::state::{AppState, ConfirmationModal, SUBMITTED_MESSAGE};
use crate::model::domain::Domain;
use crate::model::idea::{Idea, ValidationError};

/// User or runtime event fed into `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectFormDomain(Option<Domain>),
    EditDraft(String),
    Submit,
    SelectViewingDomain(Option<Domain>),
    DismissConfirmation,
    /// Reported back by the runtime when an effect failed.
    ShowError(String),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Mirror the whole store to persistent storage.
    PersistStore,
    /// Hand the new idea to an attached remote service, if any.
    PublishIdea { domain: Domain, idea: Idea },
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
    /// Set when a submit was rejected.
    pub rejection: Option<ValidationError>,
}

impl Transition {
    fn quiet(state: AppState) -> Self {
        Self {
            state,
            effects: Vec::new(),
            rejection: None,
        }
    }
}

/// Validates a submission in the fixed order: domain first, then text.
pub fn validate_submission(
    domain: Option<Domain>,
    text: &str,
) -> Result<(Domain, Idea), ValidationError> {
    let domain = domain.ok_or(ValidationError::MissingDomain)?;
    let idea = Idea::new(text)?;
    Ok((domain, idea))
}

/// Applies one action.
pub fn update(mut state: AppState, action: Action) -> Transition {
    match action {
        Action::SelectFormDomain(domain) => {
            state.form_domain = domain;
            Transition::quiet(state)
        }
        Action::EditDraft(text) => {
            state.draft = text;
            Transition::quiet(state)
        }
        Action::SelectViewingDomain(domain) => {
            state.viewing_domain = domain;
            Transition::quiet(state)
        }
        Action::DismissConfirmation => {
            state.confirmation.visible = false;
            Transition::quiet(state)
        }
        Action::ShowError(message) => {
            state.error_message = Some(message);
            Transition::quiet(state)
        }
        Action::Submit => submit(state),
    }
}

fn submit(mut state: AppState) -> Transition {
    state.error_message = None;

    let (domain, idea) = match validate_submission(state.form_domain, &state.draft) {
        Ok(valid) => valid,
        Err(err) => {
            state.error_message = Some(err.to_string());
            return Transition {
                state,
                effects: Vec::new(),
                rejection: Some(err),
            };
        }
    };

    state.store.append(domain, idea.clone());
    state.confirmation = ConfirmationModal::shown(SUBMITTED_MESSAGE);
    state.draft.clear();
    state.form_domain = None;
    state.viewing_domain = Some(domain);

    Transition {
        state,
        effects: vec![Effect::PersistStore, Effect::PublishIdea { domain, idea }],
        rejection: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{update, validate_submission, Action, Effect};
    use crate::app::state::{AppState, SUBMITTED_MESSAGE};
    use crate::model::domain::Domain;
    use crate::model::idea::ValidationError;

    fn ready(domain: Option<Domain>, draft: &str) -> AppState {
        AppState {
            form_domain: domain,
            draft: draft.to_string(),
            ..AppState::default()
        }
    }

    #[test]
    fn domain_is_checked_before_text() {
        assert_eq!(
            validate_submission(None, "   "),
            Err(ValidationError::MissingDomain)
        );
        assert_eq!(
            validate_submission(Some(Domain::Art), "   "),
            Err(ValidationError::EmptyIdea)
        );
    }

    #[test]
    fn successful_submit_resets_form_and_switches_viewer() {
        let mut state = ready(Some(Domain::Research), "  quantum dots  ");
        state.viewing_domain = Some(Domain::Product);
        state.error_message = Some("stale".to_string());

        let transition = update(state, Action::Submit);
        let next = transition.state;

        assert_eq!(next.store.ideas(Domain::Research)[0].as_str(), "quantum dots");
        assert_eq!(next.form_domain, None);
        assert!(next.draft.is_empty());
        assert_eq!(next.viewing_domain, Some(Domain::Research));
        assert_eq!(next.error_message, None);
        assert!(next.confirmation.visible);
        assert_eq!(next.confirmation.message, SUBMITTED_MESSAGE);
        assert_eq!(transition.effects[0], Effect::PersistStore);
        assert!(matches!(
            transition.effects[1],
            Effect::PublishIdea { domain: Domain::Research, .. }
        ));
    }

    #[test]
    fn rejected_submit_keeps_draft_and_selection() {
        let state = ready(Some(Domain::Product), "   ");
        let transition = update(state, Action::Submit);

        assert_eq!(transition.rejection, Some(ValidationError::EmptyIdea));
        assert!(transition.effects.is_empty());
        assert!(transition.state.store.is_empty());
        assert_eq!(transition.state.form_domain, Some(Domain::Product));
        assert_eq!(transition.state.draft, "   ");
        assert_eq!(
            transition.state.error_message.as_deref(),
            Some("Please enter your idea before submitting.")
        );
    }

    #[test]
    fn viewer_selection_does_not_touch_form_selection() {
        let state = ready(Some(Domain::Art), "draft");
        let next = update(state, Action::SelectViewingDomain(Some(Domain::Startup))).state;
        assert_eq!(next.form_domain, Some(Domain::Art));
        assert_eq!(next.viewing_domain, Some(Domain::Startup));

        let next = update(next, Action::SelectFormDomain(None)).state;
        assert_eq!(next.viewing_domain, Some(Domain::Startup));
    }

    #[test]
    fn dismiss_hides_modal_only() {
        let state = ready(Some(Domain::Art), "x");
        let shown = update(state, Action::Submit).state;
        let dismissed = update(shown.clone(), Action::DismissConfirmation).state;

        assert!(!dismissed.confirmation.visible);
        assert_eq!(dismissed.store, shown.store);
    }

    #[test]
    fn second_submit_does_not_stack_modals() {
        let state = ready(Some(Domain::Art), "one");
        let state = update(state, Action::Submit).state;
        let state = update(state, Action::SelectFormDomain(Some(Domain::Art))).state;
        let state = update(state, Action::EditDraft("two".to_string())).state;
        let state = update(state, Action::Submit).state;

        assert!(state.confirmation.visible);
        assert_eq!(state.store.count(Domain::Art), 2);
    }
}
