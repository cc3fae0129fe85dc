use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "calendar_grid.db";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "KenBoyle", "RustCalendarGrid")
}

/// Reads and writes `config.toml`.
pub struct SettingsService {
    config_path: PathBuf,
}

impl SettingsService {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Service for the platform config directory, if one can be resolved.
    pub fn from_project_dirs() -> Option<Self> {
        project_dirs().map(|dirs| Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config. A missing file yields defaults; a malformed or
    /// invalid one is an error.
    pub fn get(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).context(format!(
            "Failed to read config at {}",
            self.config_path.display()
        ))?;

        let config: AppConfig = toml::from_str(&content).context("Failed to parse config")?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(config)
    }

    pub fn get_or_default(&self) -> AppConfig {
        match self.get() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                AppConfig::default()
            }
        }
    }

    pub fn update(&self, config: &AppConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, content).context(format!(
            "Failed to write config at {}",
            self.config_path.display()
        ))?;

        Ok(())
    }
}

/// Database location used when the config does not override it.
pub fn default_database_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(DATABASE_FILE_NAME)
    }

    #[cfg(not(debug_assertions))]
    {
        match project_dirs() {
            Some(dirs) => dirs.data_dir().join(DATABASE_FILE_NAME),
            None => PathBuf::from(DATABASE_FILE_NAME),
        }
    }
}
