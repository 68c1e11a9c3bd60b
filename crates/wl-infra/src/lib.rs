//! # wl-infra
//!
//! Adapters implementing the `wl-core` ports: the HTTP completion client,
//! the file-backed session store and the in-memory history navigator.

pub mod navigation;
pub mod onboarding_client;
pub mod session_store;

pub use navigation::InMemoryHistory;
pub use onboarding_client::HttpOnboardingClient;
pub use session_store::{FileSessionStore, SessionStoreError};
