//! Session use cases
//!
//! Persisting the credentials returned by onboarding completion, reading
//! them back, and clearing them on sign-out.

pub mod clear;
pub mod load;
pub mod persist;

pub use clear::ClearSession;
pub use load::LoadSession;
pub use persist::PersistSession;
