//! Onboarding use cases.
//!
//! This module exposes the onboarding workflow controller.

mod context;
pub mod controller;

pub use controller::{
    OnboardingController, OnboardingControllerDeps, OnboardingControllerError, PageStatus,
};
