//! # Configuration Loader
//!
//! Reads the TOML configuration file into the [`AppConfig`] DTO.
//!
//! Pure data loading only: no validation and no defaults. Defaults are the
//! wiring step's job.

use anyhow::Context;
use std::path::{Path, PathBuf};
use wl_core::config::AppConfig;

use super::app_dirs::AppDirs;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or holds a
/// value of the wrong shape.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve the configuration for this run.
///
/// An explicit `--config` path must exist. The default path is optional:
/// when it is missing every value is left empty.
pub fn resolve_config(
    explicit_path: Option<PathBuf>,
    app_dirs: &AppDirs,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit_path {
        return load_config(&path);
    }

    let default_path = app_dirs.default_config_path()?;
    if default_path.exists() {
        load_config(&default_path)
    } else {
        Ok(AppConfig::empty())
    }
}
