//! Onboarding domain module.
//!
//! An invited user lands on the onboarding page with a one-time token, picks
//! a company name, and leaves with a session. This module holds the pure
//! parts of that flow: parameter extraction, the activation guard and the
//! form state machine.

pub mod context;
pub mod guard;
pub mod state_machine;

pub use context::OnboardingContext;
pub use guard::GuardDecision;
pub use state_machine::{
    FormError, FormState, OnboardingAction, OnboardingEvent, OnboardingStateMachine,
    COMPANY_NAME_REQUIRED_MESSAGE, SUBMITTING_LABEL, SUBMIT_LABEL,
};
