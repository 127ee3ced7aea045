//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use quotepara_core::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Line parsing configuration
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Paragraph segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Line parsing configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Marker introducing one quote level
    pub quote_marker: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            quote_marker: quotepara_core::DEFAULT_QUOTE_MARKER.to_string(),
        }
    }
}

/// Paragraph segmentation configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Start a new paragraph when the quote depth changes
    pub split_on_indent_change: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel processing (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Core configuration described by this file
    pub fn core_config(&self) -> Result<Config> {
        let config = Config::builder()
            .quote_marker(self.parsing.quote_marker.clone())
            .split_on_indent_change(self.segmentation.split_on_indent_change)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}
