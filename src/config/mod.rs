//! Server configuration.
//!
//! The mock is deliberately knob-free: the only external configuration is
//! the listen port, read from the `PORT` environment variable.

use serde::{Deserialize, Serialize};

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Root configuration for the mock server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MockConfig {
    /// Listener configuration (bind port).
    pub listener: ListenerConfig,
}

impl MockConfig {
    /// Build configuration from the process environment.
    ///
    /// An unset `PORT` falls back to [`DEFAULT_PORT`]; an unparseable one
    /// is a startup error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listener = match std::env::var("PORT") {
            Ok(value) => ListenerConfig::from_port_str(&value)?,
            Err(_) => ListenerConfig::default(),
        };

        Ok(Self { listener })
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// Parse a `PORT` environment value.
    pub fn from_port_str(value: &str) -> Result<Self, ConfigError> {
        let port = value.parse().map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { port })
    }

    /// Full bind address (all interfaces).
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
