//! Application configuration, stored as TOML.

use std::path::{Path, PathBuf};

use cyberonto_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Top-level configuration for the cyberonto application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON taxonomy snapshot loaded at startup.
    pub taxonomy_path: PathBuf,
    /// Default `tracing` filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Hybrid search settings.
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            taxonomy_path: PathBuf::from("data/taxonomy.json"),
            log_filter: "cyberonto=info,cyberonto_search=info".to_owned(),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_file`] for an existing file.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks the search settings and that a taxonomy path is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.taxonomy_path.as_os_str().is_empty() {
            return Err(AppError::Config("taxonomy_path must not be empty".into()));
        }
        self.search
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Returns the default config file path: `<config dir>/cyberonto/config.toml`.
    pub fn default_config_path() -> PathBuf {
        crate::app_dirs::config_dir().join("config.toml")
    }
}
