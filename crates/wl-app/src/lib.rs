//! Worklog onboarding application layer
//!
//! Use cases and the onboarding workflow controller. Depends only on
//! `wl-core` ports; adapters are injected by the shell.

pub mod usecases;
