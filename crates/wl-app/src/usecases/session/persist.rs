use std::sync::Arc;

use tracing::{debug, warn};
use wl_core::ports::SessionStorePort;
use wl_core::session::{CompletionResult, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

/// Use case for persisting session credentials after onboarding.
///
/// Writes are unconditional overwrites. Storage failures are logged and
/// swallowed: persisting must never fail the onboarding workflow.
pub struct PersistSession {
    store: Arc<dyn SessionStorePort>,
}

impl PersistSession {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    /// Create a new PersistSession use case from cloned Arc<dyn Port> references.
    pub fn from_ports(store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(store)
    }

    pub async fn execute(&self, result: CompletionResult) {
        let CompletionResult {
            access_token,
            refresh_token,
            user,
        } = result;

        self.write(ACCESS_TOKEN_KEY, access_token.expose()).await;
        self.write(REFRESH_TOKEN_KEY, refresh_token.expose()).await;

        let has_user = user.is_some();
        if let Some(user) = user {
            match serde_json::to_string(&user) {
                Ok(json) => self.write(USER_KEY, &json).await,
                Err(err) => warn!(error = %err, "failed to serialize user for session storage"),
            }
        }

        debug!(has_user, "session persisted");
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set_item(key, value).await {
            warn!(key, error = %err, "failed to write session entry");
        }
    }
}
