//! Client configuration: server location and player secret.

use crate::api::Credentials;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default game server.
pub const DEFAULT_BASE_URL: &str = "https://pax.ulaval.ca/gobblet/api/";

/// Environment variable holding the player secret.
pub const SECRET_ENV_VAR: &str = "GOBBLET_SECRET";

/// Client configuration, usually read from `gobblet.toml`.
#[derive(Clone, Getters, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the game server.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Secret token issued for the player.
    #[serde(default)]
    secret: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            secret: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .finish()
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(base_url = %config.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Applies the secret from the environment, if set.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(SECRET_ENV_VAR) {
            Ok(secret) if !secret.is_empty() => {
                debug!(var = SECRET_ENV_VAR, "Using secret from environment");
                self.with_secret(secret)
            }
            _ => self,
        }
    }

    /// Builds the credentials for a player.
    #[instrument(skip(self))]
    pub fn credentials(&self, idul: &str) -> Result<Credentials, ConfigError> {
        let secret = self.secret.clone().ok_or_else(|| {
            ConfigError::new(format!(
                "No secret configured: set {} or `secret` in the config file",
                SECRET_ENV_VAR
            ))
        })?;
        Ok(Credentials::new(idul.to_string(), secret))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
