use std::sync::Arc;

use tracing::info;
use wl_core::ports::SessionStorePort;
use wl_core::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

/// Use case for signing out: removes every session entry.
pub struct ClearSession {
    store: Arc<dyn SessionStorePort>,
}

impl ClearSession {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub fn from_ports(store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(store)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            self.store.remove_item(key).await?;
        }
        info!("session cleared");
        Ok(())
    }
}
