//! Service configuration
//!
//! Loaded from an optional JSON file; every field has a default. `HOST`,
//! `PORT` and `LOG_LEVEL` from the environment override the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed::DEFAULT_FEED_CAPACITY;
use crate::http_server::instagram_routes::FULL_NAME_FIELD;
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;
use crate::records::{RecordStoreConfig, IDENTIFIER_FIELD};

/// Longest accepted post text, in characters
pub const DEFAULT_MAX_POST_LENGTH: usize = 280;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Posts retained by the tweet feed (default: 42)
    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,

    /// Longest accepted post, in characters (default: 280)
    #[serde(default = "default_max_post_length")]
    pub max_post_length: usize,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// User directory settings
    #[serde(default)]
    pub records: RecordStoreConfig,
}

fn default_feed_capacity() -> usize {
    DEFAULT_FEED_CAPACITY
}

fn default_max_post_length() -> usize {
    DEFAULT_MAX_POST_LENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            feed_capacity: default_feed_capacity(),
            max_post_length: default_max_post_length(),
            log_level: default_log_level(),
            records: RecordStoreConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from `path` if given, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply `HOST`, `PORT` and `LOG_LEVEL` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.http.host = host;
        }

        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            self.http.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(level) = lookup("LOG_LEVEL").filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }

        Ok(())
    }

    /// Reject values the services cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.severity()?;

        if self.max_post_length == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_post_length".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let contact_field = self.records.contact_field.as_str();
        if contact_field.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "records.contact_field".to_string(),
                reason: "must not be blank".to_string(),
            });
        }

        // Both names are written by the user routes; a contact field that
        // shares one would be overwritten or serialized twice.
        if contact_field == FULL_NAME_FIELD || contact_field == IDENTIFIER_FIELD {
            return Err(ConfigError::InvalidValue {
                name: "records.contact_field".to_string(),
                reason: format!("'{}' is reserved", contact_field),
            });
        }

        Ok(())
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        self.log_level
            .parse()
            .map_err(|reason| ConfigError::InvalidValue {
                name: "log_level".to_string(),
                reason,
            })
    }
}
