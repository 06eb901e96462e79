use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Unit;
use crate::provider::openweather::DEFAULT_API_KEY;
use crate::session::{DEFAULT_CITY, Settings};

/// Top-level configuration stored on disk. Every field is optional; a
/// missing file or empty table means the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides the embedded provider credential.
    pub api_key: Option<String>,

    /// City shown on start, e.g. "New York".
    pub city: Option<String>,

    /// Display unit, "imperial" or "metric".
    pub unit: Option<Unit>,
}

impl Config {
    /// Credential to send to the provider.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
    }

    /// Widget settings from this config, defaults filled in.
    pub fn settings(&self) -> Settings {
        Settings {
            city: self.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string()),
            unit: self.unit.unwrap_or_default(),
        }
    }

    /// Persist a settings choice so the next start uses it.
    pub fn remember_settings(&mut self, settings: &Settings) {
        self.city = Some(settings.city.clone());
        self.unit = Some(settings.unit);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "widget-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
