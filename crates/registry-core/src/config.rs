//! Configuration management for the registry extractor

use serde::{Deserialize, Serialize};
use crate::constants::{
    DEFAULT_COLUMN_SEPARATOR_WIDTH, DEFAULT_REGISTRY_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::{RegistryError, Result};
use std::path::Path;

/// Main configuration structure. Every section is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub registry: RegistrySourceConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Where registry pages are fetched from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySourceConfig {
    #[serde(alias = "url", default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RegistrySourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Tuning for the text-blob parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Minimum whitespace run treated as a column break inside an address cell
    #[serde(default = "default_column_separator_width")]
    pub column_separator_width: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            column_separator_width: default_column_separator_width(),
        }
    }
}

// Default functions
fn default_base_url() -> String {
    DEFAULT_REGISTRY_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_column_separator_width() -> usize {
    DEFAULT_COLUMN_SEPARATOR_WIDTH
}

impl RegistryConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RegistryError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.registry.base_url.trim().is_empty() {
            return Err(RegistryError::Config("Registry base_url is required".to_string()));
        }

        if self.registry.timeout_secs == 0 {
            return Err(RegistryError::Config(
                "Registry timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.extraction.column_separator_width == 0 {
            return Err(RegistryError::Config(
                "column_separator_width must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
