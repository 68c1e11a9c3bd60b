pub mod app_dirs;
pub mod config;
pub mod tracing;
pub mod wiring;

pub use app_dirs::AppDirs;
pub use config::{load_config, resolve_config};
pub use wiring::{assemble_onboarding_page, wire_onboarding_page, OnboardingPage, Settings};
