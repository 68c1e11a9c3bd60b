//! # Pure Data Module - Data Transfer Objects Only
//!
//! Maps the TOML configuration file into [`AppConfig`].
//!
//! This module contains data only: no validation and no default value
//! calculation. Missing keys map to empty values; the shell decides what an
//! empty value means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `http://localhost:8000` (may be empty)
    pub api_base_url: String,

    /// Completion request timeout in seconds (0 when unset)
    pub request_timeout_secs: u64,

    /// Path of the sign-in route (may be empty)
    pub login_route: String,

    /// Path of the main application route (may be empty)
    pub dashboard_route: String,

    /// Directory holding the session store and logs (path info only)
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Must not validate or default: empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        let request_timeout_secs = match toml_value
            .get("api")
            .and_then(|a| a.get("request_timeout_secs"))
            .and_then(|v| v.as_integer())
        {
            Some(secs) => u64::try_from(secs).map_err(|_| {
                anyhow::anyhow!("api.request_timeout_secs must not be negative, got {secs}")
            })?,
            None => 0,
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            request_timeout_secs,
            login_route: str_at("routes", "login"),
            dashboard_route: str_at("routes", "dashboard"),
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
        })
    }

    /// Create empty AppConfig (all empty/zero values).
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            request_timeout_secs: 0,
            login_route: String::new(),
            dashboard_route: String::new(),
            data_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_maps_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [api]
            base_url = "https://worklog.example.com"
            request_timeout_secs = 15

            [routes]
            login = "/signin"
            dashboard = "/home"

            [storage]
            data_dir = "/var/lib/worklog"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.api_base_url, "https://worklog.example.com");
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.login_route, "/signin");
        assert_eq!(config.dashboard_route, "/home");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/worklog"));
    }

    #[test]
    fn from_toml_leaves_missing_values_empty() {
        let value: toml::Value = toml::from_str("[api]\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }

    #[test]
    fn from_toml_rejects_negative_timeout() {
        let value: toml::Value = toml::from_str("[api]\nrequest_timeout_secs = -1\n").unwrap();
        assert!(AppConfig::from_toml(&value).is_err());
    }
}
