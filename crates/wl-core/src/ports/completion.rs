use async_trait::async_trait;

use crate::security::SecretString;
use crate::session::CompletionResult;

/// Failure of the onboarding completion call.
///
/// `Display` is the human-readable message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// Backend answered and refused the request (expired token, taken name...).
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },
    /// Request never got an answer (connect error, timeout).
    #[error("{message}")]
    Transport { message: String },
    /// Backend answered with a body that could not be understood.
    #[error("{message}")]
    InvalidResponse { message: String },
}

impl CompletionError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            status: None,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message, .. }
            | Self::Transport { message }
            | Self::InvalidResponse { message } => message,
        }
    }
}

/// Exchanges an onboarding token and a company name for session credentials.
#[async_trait]
pub trait OnboardingCompletionPort: Send + Sync {
    async fn complete_onboarding(
        &self,
        onboarding_token: &SecretString,
        company_name: &str,
    ) -> Result<CompletionResult, CompletionError>;
}
