//! Validation logic for configuration.

use anyhow::{Context, Result};

use super::defaults::{AuthConfig, LoggingConfig};
use super::Config;

impl Config {
    /// Validate what every command depends on.
    ///
    /// `auth` is checked separately, only by commands that touch stored data.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<()> {
        self.level
            .parse::<tracing::Level>()
            .map(|_| ())
            .with_context(|| format!("logging.level '{}' is not a valid level", self.level))
    }
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<()> {
        let has_key = self
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if self.required && !has_key {
            anyhow::bail!("auth.required is set but auth.api_key is empty");
        }
        Ok(())
    }
}
