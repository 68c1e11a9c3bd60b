use async_trait::async_trait;

use crate::navigation::{NavigationMode, Route};

/// Moves the user to another route.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn navigate(&self, route: Route, mode: NavigationMode) -> anyhow::Result<()>;
}
