//! # Dependency Injection
//!
//! Assembles the onboarding page: resolves settings from the loaded
//! configuration, creates the infra adapters and injects them into the
//! controller through their ports.
//!
//! This is the only place that depends on `wl-infra` and `wl-app` together.
//! It assembles, it does not decide.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use wl_app::usecases::{LoadSession, OnboardingController, OnboardingControllerDeps, PersistSession};
use wl_core::config::AppConfig;
use wl_core::navigation::RouteTable;
use wl_core::onboarding::OnboardingContext;
use wl_core::ports::{OnboardingCompletionPort, OnboardingEventPort, SessionStorePort};
use wl_infra::{FileSessionStore, HttpOnboardingClient, InMemoryHistory};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const LOGS_DIR_NAME: &str = "logs";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub routes: RouteTable,
    pub data_dir: PathBuf,
}

impl Settings {
    /// Fill every empty config value with its default.
    pub fn resolve(config: AppConfig, default_data_dir: PathBuf) -> Self {
        fn or_default(value: String, default: &str) -> String {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value
            }
        }

        let default_routes = RouteTable::default();
        let request_timeout_secs = match config.request_timeout_secs {
            0 => DEFAULT_REQUEST_TIMEOUT_SECS,
            secs => secs,
        };

        Self {
            api_base_url: or_default(config.api_base_url, DEFAULT_API_BASE_URL),
            request_timeout: Duration::from_secs(request_timeout_secs),
            routes: RouteTable {
                login: or_default(config.login_route, &default_routes.login),
                dashboard: or_default(config.dashboard_route, &default_routes.dashboard),
                onboarding: default_routes.onboarding,
            },
            data_dir: if config.data_dir.as_os_str().is_empty() {
                default_data_dir
            } else {
                config.data_dir
            },
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join(LOGS_DIR_NAME)
    }
}

/// Everything the shell needs to drive one onboarding page.
pub struct OnboardingPage {
    pub controller: Arc<OnboardingController>,
    pub history: Arc<InMemoryHistory>,
    pub load_session: LoadSession,
}

/// Wire an onboarding page with explicit adapters.
pub fn assemble_onboarding_page(
    context: OnboardingContext,
    routes: RouteTable,
    completion: Arc<dyn OnboardingCompletionPort>,
    session_store: Arc<dyn SessionStorePort>,
    event_port: Arc<dyn OnboardingEventPort>,
) -> OnboardingPage {
    let history = Arc::new(InMemoryHistory::at_onboarding(routes));

    let controller = OnboardingController::new(
        context,
        OnboardingControllerDeps {
            completion,
            persist_session: Arc::new(PersistSession::from_ports(session_store.clone())),
            navigator: history.clone(),
            event_port,
        },
    );

    OnboardingPage {
        controller: Arc::new(controller),
        history,
        load_session: LoadSession::from_ports(session_store),
    }
}

/// Wire an onboarding page against the configured backend and data directory.
pub fn wire_onboarding_page(
    settings: &Settings,
    context: OnboardingContext,
    event_port: Arc<dyn OnboardingEventPort>,
) -> WiringResult<OnboardingPage> {
    let completion = HttpOnboardingClient::new(&settings.api_base_url, settings.request_timeout)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    info!(endpoint = completion.endpoint(), "onboarding backend configured");

    let session_store = FileSessionStore::with_defaults(&settings.data_dir);
    info!(path = %session_store.path().display(), "session store configured");

    Ok(assemble_onboarding_page(
        context,
        settings.routes.clone(),
        Arc::new(completion),
        Arc::new(session_store),
        event_port,
    ))
}
