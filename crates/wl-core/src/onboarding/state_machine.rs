//! Onboarding form state machine.
//!
//! Defines a pure state transition function for the onboarding form.

use crate::navigation::{NavigationMode, Route};
use crate::session::CompletionResult;

/// Validation message for an empty company name.
pub const COMPANY_NAME_REQUIRED_MESSAGE: &str = "Inserisci il nome dell'azienda";
/// Submit label while a completion request is in flight.
pub const SUBMITTING_LABEL: &str = "Configurazione in corso...";
/// Submit label while idle.
pub const SUBMIT_LABEL: &str = "Inizia";

/// Form error shown inline under the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Trimmed company name is empty.
    #[error("Inserisci il nome dell'azienda")]
    CompanyNameRequired,
    /// Completion call failed; message is shown verbatim.
    #[error("{message}")]
    CompletionFailed { message: String },
}

/// Onboarding form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub company_name: String,
    pub is_submitting: bool,
    pub error: Option<FormError>,
}

impl FormState {
    /// Initial state, pre-filled with the suggested company name.
    pub fn new(suggested_company_name: impl Into<String>) -> Self {
        Self {
            company_name: suggested_company_name.into(),
            is_submitting: false,
            error: None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Whether the input and the submit control accept interaction.
    pub fn is_interactive(&self) -> bool {
        !self.is_submitting
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Events that drive the onboarding form.
#[derive(Debug)]
pub enum OnboardingEvent {
    /// User edited the company name.
    EditCompanyName { value: String },
    /// User pressed the submit control.
    Submit,
    /// Completion call resolved.
    CompletionSucceeded { result: CompletionResult },
    /// Completion call rejected.
    CompletionFailed { message: String },
}

impl OnboardingEvent {
    /// Variant name, safe to log (carries no user data or secrets).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EditCompanyName { .. } => "EditCompanyName",
            Self::Submit => "Submit",
            Self::CompletionSucceeded { .. } => "CompletionSucceeded",
            Self::CompletionFailed { .. } => "CompletionFailed",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug)]
pub enum OnboardingAction {
    /// Invoke the completion capability.
    CompleteOnboarding { company_name: String },
    /// Write the returned credentials to client storage.
    PersistSession { result: CompletionResult },
    /// Leave the page.
    Navigate { route: Route, mode: NavigationMode },
}

impl OnboardingAction {
    /// Variant name, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CompleteOnboarding { .. } => "CompleteOnboarding",
            Self::PersistSession { .. } => "PersistSession",
            Self::Navigate { .. } => "Navigate",
        }
    }
}

/// Pure onboarding state machine: no side effects.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        state: FormState,
        event: OnboardingEvent,
    ) -> (FormState, Vec<OnboardingAction>) {
        match event {
            // Input is disabled while a request is in flight.
            OnboardingEvent::EditCompanyName { .. } if state.is_submitting => (state, Vec::new()),
            OnboardingEvent::EditCompanyName { value } => (
                FormState {
                    company_name: value,
                    ..state
                },
                Vec::new(),
            ),
            OnboardingEvent::Submit if state.is_submitting => (state, Vec::new()),
            OnboardingEvent::Submit => {
                let company_name = state.company_name.trim().to_string();
                if company_name.is_empty() {
                    return (
                        FormState {
                            error: Some(FormError::CompanyNameRequired),
                            ..state
                        },
                        Vec::new(),
                    );
                }
                (
                    FormState {
                        is_submitting: true,
                        error: None,
                        ..state
                    },
                    vec![OnboardingAction::CompleteOnboarding { company_name }],
                )
            }
            OnboardingEvent::CompletionSucceeded { result } if state.is_submitting => (
                FormState {
                    is_submitting: false,
                    ..state
                },
                vec![
                    OnboardingAction::PersistSession { result },
                    OnboardingAction::Navigate {
                        route: Route::Dashboard,
                        mode: NavigationMode::Replace,
                    },
                ],
            ),
            OnboardingEvent::CompletionFailed { message } if state.is_submitting => (
                FormState {
                    is_submitting: false,
                    error: Some(FormError::CompletionFailed { message }),
                    ..state
                },
                Vec::new(),
            ),
            // A completion outcome with no request in flight is stale.
            OnboardingEvent::CompletionSucceeded { .. } | OnboardingEvent::CompletionFailed { .. } => {
                (state, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitting(company_name: &str) -> FormState {
        FormState {
            company_name: company_name.to_string(),
            is_submitting: true,
            error: None,
        }
    }

    #[test]
    fn edit_updates_company_name() {
        let (next, actions) = OnboardingStateMachine::transition(
            FormState::new("Acme"),
            OnboardingEvent::EditCompanyName {
                value: "Globex".into(),
            },
        );
        assert_eq!(next.company_name, "Globex");
        assert!(actions.is_empty());
    }

    #[test]
    fn edit_is_ignored_while_submitting() {
        let (next, actions) = OnboardingStateMachine::transition(
            submitting("Acme"),
            OnboardingEvent::EditCompanyName {
                value: "Globex".into(),
            },
        );
        assert_eq!(next, submitting("Acme"));
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_with_blank_name_sets_validation_error_only() {
        for blank in ["", "   ", "\t\n"] {
            let (next, actions) = OnboardingStateMachine::transition(
                FormState::new(blank),
                OnboardingEvent::Submit,
            );
            assert_eq!(next.error, Some(FormError::CompanyNameRequired));
            assert_eq!(next.company_name, blank);
            assert!(!next.is_submitting);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn validation_error_replaces_previous_completion_error() {
        let state = FormState {
            company_name: " ".into(),
            is_submitting: false,
            error: Some(FormError::CompletionFailed {
                message: "token expired".into(),
            }),
        };
        let (next, _) = OnboardingStateMachine::transition(state, OnboardingEvent::Submit);
        assert_eq!(next.error_message().as_deref(), Some(COMPANY_NAME_REQUIRED_MESSAGE));
    }

    #[test]
    fn submit_starts_completion_and_clears_error() {
        let state = FormState {
            company_name: "  Acme  ".into(),
            is_submitting: false,
            error: Some(FormError::CompanyNameRequired),
        };
        let (next, actions) = OnboardingStateMachine::transition(state, OnboardingEvent::Submit);

        assert!(next.is_submitting);
        assert_eq!(next.error, None);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            OnboardingAction::CompleteOnboarding { company_name } if company_name == "Acme"
        ));
    }

    #[test]
    fn submit_while_submitting_produces_no_action() {
        let (next, actions) =
            OnboardingStateMachine::transition(submitting("Acme"), OnboardingEvent::Submit);
        assert_eq!(next, submitting("Acme"));
        assert!(actions.is_empty());
    }

    #[test]
    fn success_resets_loading_then_persists_and_replaces_route() {
        let result = CompletionResult::new("X", "Y", None);
        let (next, actions) = OnboardingStateMachine::transition(
            submitting("Acme"),
            OnboardingEvent::CompletionSucceeded { result },
        );

        assert!(!next.is_submitting);
        assert_eq!(next.error, None);
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            &actions[0],
            OnboardingAction::PersistSession { result }
                if result.access_token.expose() == "X" && result.refresh_token.expose() == "Y"
        ));
        assert!(matches!(
            actions[1],
            OnboardingAction::Navigate {
                route: Route::Dashboard,
                mode: NavigationMode::Replace
            }
        ));
    }

    #[test]
    fn failure_surfaces_message_verbatim_and_allows_resubmit() {
        let (next, actions) = OnboardingStateMachine::transition(
            submitting("Acme"),
            OnboardingEvent::CompletionFailed {
                message: "token expired".into(),
            },
        );
        assert!(!next.is_submitting);
        assert_eq!(next.error_message().as_deref(), Some("token expired"));
        assert!(actions.is_empty());

        let (again, actions) = OnboardingStateMachine::transition(next, OnboardingEvent::Submit);
        assert!(again.is_submitting);
        assert_eq!(again.error, None);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn stale_completion_outcomes_are_ignored() {
        let idle = FormState::new("Acme");
        let (next, actions) = OnboardingStateMachine::transition(
            idle.clone(),
            OnboardingEvent::CompletionFailed {
                message: "late".into(),
            },
        );
        assert_eq!(next, idle);
        assert!(actions.is_empty());

        let (next, actions) = OnboardingStateMachine::transition(
            idle.clone(),
            OnboardingEvent::CompletionSucceeded {
                result: CompletionResult::new("X", "Y", None),
            },
        );
        assert_eq!(next, idle);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_label_follows_loading_flag() {
        assert_eq!(FormState::new("Acme").submit_label(), "Inizia");
        assert_eq!(submitting("Acme").submit_label(), "Configurazione in corso...");
        assert!(!submitting("Acme").is_interactive());
    }
}
