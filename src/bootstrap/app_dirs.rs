use std::path::PathBuf;

const APP_DIR_NAME: &str = "worklog";
const CONFIG_FILE_NAME: &str = "config.toml";

fn resolved_app_dir_name() -> String {
    match std::env::var("WL_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves the application data root under the platform local data directory.
pub struct AppDirs {
    base_data_local_dir_override: Option<PathBuf>,
}

impl AppDirs {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    #[cfg(test)]
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    /// `<data_local_dir>/worklog[-<WL_PROFILE>]`
    pub fn app_data_root(&self) -> anyhow::Result<PathBuf> {
        let base = self
            .base_data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("local data directory is unavailable on this platform"))?;
        Ok(base.join(resolved_app_dir_name()))
    }

    pub fn default_config_path(&self) -> anyhow::Result<PathBuf> {
        Ok(self.app_data_root()?.join(CONFIG_FILE_NAME))
    }
}

impl Default for AppDirs {
    fn default() -> Self {
        Self::new()
    }
}
