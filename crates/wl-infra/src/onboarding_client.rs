//! HTTP adapter for the onboarding completion endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wl_core::ports::{CompletionError, OnboardingCompletionPort};
use wl_core::security::SecretString;
use wl_core::session::CompletionResult;

const COMPLETE_ONBOARDING_PATH: &str = "/api/auth/complete-onboarding";

#[derive(Serialize)]
struct CompleteOnboardingRequest<'a> {
    onboarding_token: &'a str,
    company_name: &'a str,
}

/// Backend `TokenResponse`; fields the workflow does not use are skipped.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    user: Option<serde_json::Value>,
}

/// Backend error envelope. `detail` is a string for handled errors and a
/// list for request validation errors.
#[derive(Deserialize)]
struct ErrorEnvelope {
    detail: serde_json::Value,
}

/// Completion client talking to the Worklog backend.
pub struct HttpOnboardingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOnboardingClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("worklog/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                COMPLETE_ONBOARDING_PATH
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn rejection_from_body(status: reqwest::StatusCode, body: &str) -> CompletionError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| match envelope.detail {
            serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        });

    CompletionError::Rejected {
        status: Some(status.as_u16()),
        message: detail.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
    }
}

#[async_trait]
impl OnboardingCompletionPort for HttpOnboardingClient {
    async fn complete_onboarding(
        &self,
        onboarding_token: &SecretString,
        company_name: &str,
    ) -> Result<CompletionResult, CompletionError> {
        debug!(endpoint = %self.endpoint, "calling onboarding completion endpoint");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&CompleteOnboardingRequest {
                onboarding_token: onboarding_token.expose(),
                company_name,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "onboarding completion request failed");
                CompletionError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport {
                message: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(rejection_from_body(status, &body));
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::InvalidResponse {
                message: format!("invalid completion response: {e}"),
            })?;

        Ok(CompletionResult::new(
            token.access_token,
            token.refresh_token,
            token.user,
        ))
    }
}
