use std::sync::Arc;

use tracing::warn;
use wl_core::ports::SessionStorePort;
use wl_core::session::{SessionRecord, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

/// Use case for reading the stored session back.
///
/// Returns `None` unless both tokens are present. An unreadable `user`
/// entry is dropped with a warning rather than failing the read.
pub struct LoadSession {
    store: Arc<dyn SessionStorePort>,
}

impl LoadSession {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub fn from_ports(store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(store)
    }

    pub async fn execute(&self) -> anyhow::Result<Option<SessionRecord>> {
        let Some(access_token) = self.store.get_item(ACCESS_TOKEN_KEY).await? else {
            return Ok(None);
        };
        let Some(refresh_token) = self.store.get_item(REFRESH_TOKEN_KEY).await? else {
            return Ok(None);
        };

        let user = match self.store.get_item(USER_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(error = %err, "stored user entry is not valid JSON, ignoring");
                    None
                }
            },
            None => None,
        };

        Ok(Some(SessionRecord {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user,
        }))
    }
}
