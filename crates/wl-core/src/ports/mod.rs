//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding use cases and the
//! infrastructure implementations (HTTP backend, client storage, router,
//! renderer). Use cases only ever see these traits.

pub mod completion;
pub mod navigator;
pub mod onboarding_event;
pub mod session_store;

pub use completion::{CompletionError, OnboardingCompletionPort};
pub use navigator::NavigatorPort;
pub use onboarding_event::OnboardingEventPort;
pub use session_store::SessionStorePort;
