// Settings module
// Application configuration read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const GOOGLE_CALENDAR_API: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the default database location.
    pub database_path: Option<PathBuf>,
    pub grid: GridConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Nominal row height before zoom; the live height is always measured.
    pub hour_height_px: f32,
    /// First hour drawn at the top of the day grid.
    pub first_visible_hour: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hour_height_px: 48.0,
            first_visible_hour: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Environment variable holding the OAuth bearer token.
    pub access_token_env: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_CALENDAR_API.to_string(),
            access_token_env: "CALENDAR_ACCESS_TOKEN".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.grid.hour_height_px.is_finite() || self.grid.hour_height_px <= 0.0 {
            return Err("Hour height must be a positive number".to_string());
        }

        if self.grid.first_visible_hour > 23 {
            return Err("First visible hour must be between 0 and 23".to_string());
        }

        if !self.remote.base_url.starts_with("https://")
            && !self.remote.base_url.starts_with("http://")
        {
            return Err("Remote base URL must be an http(s) URL".to_string());
        }

        Ok(())
    }
}
