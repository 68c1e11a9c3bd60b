//! # wl-core
//!
//! Core domain models and ports for the Worklog onboarding client.
//!
//! This crate contains the pure onboarding workflow (context extraction,
//! guard, form state machine) and the port traits implemented by the
//! infrastructure layer. It performs no I/O.

pub mod config;
pub mod navigation;
pub mod onboarding;
pub mod ports;
pub mod security;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use navigation::{NavigationMode, Route, RouteTable};
pub use onboarding::{
    FormError, FormState, GuardDecision, OnboardingAction, OnboardingContext, OnboardingEvent,
    OnboardingStateMachine,
};
pub use security::SecretString;
pub use session::{CompletionResult, SessionRecord};
