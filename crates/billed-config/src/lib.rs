//! Configuration management for billed
//!
//! This module handles loading, validation, and management of
//! billed configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Attach a permissive CORS layer
    #[serde(default)]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Remote store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file with bills loaded at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// URL prefix under which uploaded receipts are served
    #[serde(default = "default_receipt_url_prefix")]
    pub receipt_url_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            receipt_url_prefix: default_receipt_url_prefix(),
        }
    }
}

fn default_receipt_url_prefix() -> String {
    "/receipts".to_string()
}

/// Receipt upload settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Accepted receipt extensions, matched case-insensitively
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Largest accepted receipt in bytes
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: usize,
    /// Show a message next to the file input when a receipt is rejected
    #[serde(default)]
    pub show_rejection_message: bool,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_size_bytes: default_max_size_bytes(),
            show_rejection_message: false,
        }
    }
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}

fn default_max_size_bytes() -> usize {
    5 * 1024 * 1024
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Width of the receipt modal in pixels
    #[serde(default = "default_modal_width")]
    pub modal_width: u32,
    /// VAT percentage used when the form leaves it empty
    #[serde(default = "default_pct")]
    pub default_pct: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            modal_width: default_modal_width(),
            default_pct: default_pct(),
        }
    }
}

fn default_modal_width() -> u32 {
    800
}

fn default_pct() -> u32 {
    20
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Receipt upload settings
    #[serde(default)]
    pub uploads: UploadsConfig,
    /// Display settings
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::IoError)?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.uploads.allowed_extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "uploads.allowed_extensions".to_string(),
                reason: "At least one receipt extension must be allowed".to_string(),
            });
        }

        if self.uploads.max_size_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "uploads.max_size_bytes".to_string(),
                reason: "Maximum receipt size must be greater than 0".to_string(),
            });
        }

        if self.ui.default_pct > 100 {
            return Err(ConfigError::InvalidValue {
                field: "ui.default_pct".to_string(),
                reason: "Default VAT percentage must be between 0 and 100".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Server listen address
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
