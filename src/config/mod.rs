//! Configuration management for airaware.
//!
//! Configuration is YAML. Two files are read and merged, later overriding
//! earlier:
//! 1. Global config (`<config_dir>/airaware/config.yaml`)
//! 2. Project config (`.airaware/config.yaml`)
//!
//! Either file may be absent; defaults fill whatever neither sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;

use crate::paths;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with full merge semantics from the default locations.
    pub fn load() -> Result<Self> {
        let config = Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(paths::CONFIG_FILE),
        )?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(PartialConfig::parse(content)?.merge_with(PartialConfig::default()))
    }

    /// Load merged configuration from specified global and project config paths.
    /// Project values override global values; missing files are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        Ok(global_config.merge_with(project_config))
    }

    /// YAML for a freshly initialized project.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

/// Returns the path to the global config file, e.g. ~/.config/airaware/config.yaml
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("airaware").join("config.yaml"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub storage: Option<PartialStorageConfig>,
    pub auth: Option<PartialAuthConfig>,
    pub logging: Option<PartialLoggingConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialStorageConfig {
    pub data_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialAuthConfig {
    pub required: Option<bool>,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialLoggingConfig {
    pub level: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_storage = self.storage.unwrap_or_default();
        let global_auth = self.auth.unwrap_or_default();
        let global_logging = self.logging.unwrap_or_default();
        let project_storage = project.storage.unwrap_or_default();
        let project_auth = project.auth.unwrap_or_default();
        let project_logging = project.logging.unwrap_or_default();

        Config {
            storage: StorageConfig {
                data_dir: project_storage
                    .data_dir
                    .or(global_storage.data_dir)
                    .unwrap_or_else(defaults::default_data_dir),
            },
            auth: AuthConfig {
                required: project_auth
                    .required
                    .or(global_auth.required)
                    .unwrap_or_default(),
                api_key: project_auth.api_key.or(global_auth.api_key),
            },
            logging: LoggingConfig {
                level: project_logging
                    .level
                    .or(global_logging.level)
                    .unwrap_or_else(defaults::default_log_level),
            },
        }
    }
}
