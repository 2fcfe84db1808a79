//! Configuration management
//!
//! Typed configuration for the console core, loaded from an optional TOML
//! file merged with `HELPDESK_`-prefixed environment variables
//! (e.g. `HELPDESK_API__BASE_URL`).

use crate::utils::error::{ConsoleError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

/// Top-level console configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    /// REST backend settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Bearer token attached to every request, if any
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            auth_token: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level / filter directive (e.g. `info`, `helpdesk_console=debug`)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ConsoleConfig {
    /// Load configuration from an optional TOML file plus environment
    /// overrides, then validate it.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }

        let config: ConsoleConfig = builder
            .add_source(Environment::with_prefix("HELPDESK").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(ConsoleError::Config(
                "api.base_url cannot be empty".to_string(),
            ));
        }

        Url::parse(&self.api.base_url)
            .map_err(|e| ConsoleError::Config(format!("Invalid api.base_url: {}", e)))?;

        if self.api.timeout == 0 {
            return Err(ConsoleError::Config(
                "api.timeout must be greater than zero".to_string(),
            ));
        }

        if self.logging.level.is_empty() {
            return Err(ConsoleError::Config(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
