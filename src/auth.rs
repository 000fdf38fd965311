//! API-key gate for commands that touch stored data.
//!
//! A caller presents a key; it must exactly match the configured one. A
//! missing configured key rejects every presented key.

use std::fmt;

use crate::config::AuthConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyError {
    /// No key was presented.
    Missing,
    /// A key was presented but does not match, or none is configured.
    Invalid,
}

impl fmt::Display for ApiKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeyError::Missing => write!(f, "API key is missing"),
            ApiKeyError::Invalid => write!(f, "Invalid API key"),
        }
    }
}

impl std::error::Error for ApiKeyError {}

/// Compare a presented key against the expected one.
pub fn check_api_key(expected: Option<&str>, provided: Option<&str>) -> Result<(), ApiKeyError> {
    let provided = provided.ok_or(ApiKeyError::Missing)?;

    match expected {
        Some(expected) if !expected.trim().is_empty() && expected == provided => Ok(()),
        _ => Err(ApiKeyError::Invalid),
    }
}

/// Enforce `auth` for a request carrying `provided`.
///
/// A no-op unless `auth.required` is set.
pub fn authorize(auth: &AuthConfig, provided: Option<&str>) -> Result<(), ApiKeyError> {
    if !auth.required {
        return Ok(());
    }

    let result = check_api_key(auth.api_key.as_deref(), provided);
    if let Err(e) = result {
        tracing::warn!(error = %e, "rejected API key");
    }
    result
}
