use crate::onboarding::FormState;

/// Receives every form state change, in order. Backs the rendered view.
#[async_trait::async_trait]
pub trait OnboardingEventPort: Send + Sync {
    async fn emit_form_state_changed(&self, state: FormState);
}
