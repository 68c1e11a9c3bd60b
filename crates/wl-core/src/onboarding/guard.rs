//! Activation guard for the onboarding page.

use super::OnboardingContext;

/// Outcome of the activation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Token present, render the form.
    Allow,
    /// Token missing, leave for the login page. Terminal for the page.
    RedirectToLogin,
}

/// Decide whether the page may render. Pure and total.
pub fn evaluate(context: &OnboardingContext) -> GuardDecision {
    if context.has_token() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}
