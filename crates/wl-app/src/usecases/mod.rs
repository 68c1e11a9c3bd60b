pub mod onboarding;
pub mod session;

pub use onboarding::{
    OnboardingController, OnboardingControllerDeps, OnboardingControllerError, PageStatus,
};
pub use session::{ClearSession, LoadSession, PersistSession};
