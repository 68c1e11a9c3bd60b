//! In-memory history navigator.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;
use wl_core::navigation::{NavigationMode, Route, RouteTable};
use wl_core::ports::NavigatorPort;

/// Router history held in memory, mirroring a browser history stack.
pub struct InMemoryHistory {
    routes: RouteTable,
    entries: Mutex<Vec<String>>,
}

impl InMemoryHistory {
    /// History whose only entry is `initial_path`.
    pub fn new(routes: RouteTable, initial_path: impl Into<String>) -> Self {
        Self {
            routes,
            entries: Mutex::new(vec![initial_path.into()]),
        }
    }

    /// History starting on the onboarding page.
    pub fn at_onboarding(routes: RouteTable) -> Self {
        let initial = routes.path(Route::Onboarding).to_string();
        Self::new(routes, initial)
    }

    pub async fn current(&self) -> Option<String> {
        self.entries.lock().await.last().cloned()
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.lock().await.clone()
    }

    /// Go back one entry. Returns the new current path, or `None` when
    /// there is nothing to go back to.
    pub async fn back(&self) -> Option<String> {
        let mut entries = self.entries.lock().await;
        if entries.len() < 2 {
            return None;
        }
        entries.pop();
        entries.last().cloned()
    }
}

#[async_trait]
impl NavigatorPort for InMemoryHistory {
    async fn navigate(&self, route: Route, mode: NavigationMode) -> anyhow::Result<()> {
        let path = self.routes.path(route).to_string();
        let mut entries = self.entries.lock().await;
        match mode {
            NavigationMode::Push => entries.push(path.clone()),
            NavigationMode::Replace => match entries.last_mut() {
                Some(current) => *current = path.clone(),
                None => entries.push(path.clone()),
            },
        }
        info!(?route, ?mode, path = %path, "history updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> InMemoryHistory {
        InMemoryHistory::new(RouteTable::default(), "/welcome")
    }

    #[tokio::test]
    async fn push_appends_entry() {
        let history = history();
        history
            .navigate(Route::Onboarding, NavigationMode::Push)
            .await
            .unwrap();

        assert_eq!(history.entries().await, vec!["/welcome", "/onboarding"]);
        assert_eq!(history.back().await.as_deref(), Some("/welcome"));
    }

    #[tokio::test]
    async fn replace_overwrites_current_entry() {
        let history = history();
        history
            .navigate(Route::Onboarding, NavigationMode::Push)
            .await
            .unwrap();
        history
            .navigate(Route::Dashboard, NavigationMode::Replace)
            .await
            .unwrap();

        assert_eq!(history.current().await.as_deref(), Some("/"));
        // The onboarding page is no longer reachable by going back.
        assert_eq!(history.back().await.as_deref(), Some("/welcome"));
        assert_eq!(history.back().await, None);
    }

    #[tokio::test]
    async fn uses_configured_paths() {
        let routes = RouteTable {
            login: "/signin".into(),
            ..RouteTable::default()
        };
        let history = InMemoryHistory::at_onboarding(routes);
        history
            .navigate(Route::Login, NavigationMode::Replace)
            .await
            .unwrap();

        assert_eq!(history.entries().await, vec!["/signin"]);
    }
}
