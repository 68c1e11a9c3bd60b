//! Routes the onboarding page can leave to.

use serde::{Deserialize, Serialize};

/// Application route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// The onboarding page itself.
    Onboarding,
    /// Sign-in page, target of the missing-token redirect.
    Login,
    /// Main application, target after successful completion.
    Dashboard,
}

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Append a new history entry.
    Push,
    /// Overwrite the current history entry; the left page is not reachable
    /// with back-navigation.
    Replace,
}

/// Maps routes to concrete paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub onboarding: String,
    pub login: String,
    pub dashboard: String,
}

impl RouteTable {
    pub fn path(&self, route: Route) -> &str {
        match route {
            Route::Onboarding => &self.onboarding,
            Route::Login => &self.login,
            Route::Dashboard => &self.dashboard,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            onboarding: "/onboarding".to_string(),
            login: "/login".to_string(),
            dashboard: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_table_paths() {
        let routes = RouteTable::default();
        assert_eq!(routes.path(Route::Login), "/login");
        assert_eq!(routes.path(Route::Dashboard), "/");
        assert_eq!(routes.path(Route::Onboarding), "/onboarding");
    }
}
