//! Parsing and segmentation configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Marker that introduces one level of quoting
pub const DEFAULT_QUOTE_MARKER: &str = "> ";

/// Processing configuration
///
/// Can be assembled with [`Config::builder`] or read from TOML:
///
/// ```toml
/// quote_marker = "> "
/// split_on_indent_change = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Literal delimiter counted to infer quote depth
    pub quote_marker: String,
    /// Start a new paragraph when the indent changes between two
    /// adjacent non-blank lines
    pub split_on_indent_change: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_marker: DEFAULT_QUOTE_MARKER.to_string(),
            split_on_indent_change: false,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.quote_marker.is_empty() {
            return Err(Error::Configuration(
                "quote_marker must not be empty".into(),
            ));
        }

        if self.quote_marker.contains('\n') {
            return Err(Error::Configuration(
                "quote_marker must not contain a line break".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    quote_marker: Option<String>,
    split_on_indent_change: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote marker
    pub fn quote_marker(mut self, marker: impl Into<String>) -> Self {
        self.quote_marker = Some(marker.into());
        self
    }

    /// Enable or disable indent-driven paragraph splitting
    pub fn split_on_indent_change(mut self, enabled: bool) -> Self {
        self.split_on_indent_change = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();
        let config = Config {
            quote_marker: self.quote_marker.unwrap_or(defaults.quote_marker),
            split_on_indent_change: self
                .split_on_indent_change
                .unwrap_or(defaults.split_on_indent_change),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.quote_marker, "> ");
        assert!(!config.split_on_indent_change);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .quote_marker("| ")
            .split_on_indent_change(true)
            .build()
            .unwrap();

        assert_eq!(config.quote_marker, "| ");
        assert!(config.split_on_indent_change);
    }

    #[test]
    fn test_builder_rejects_empty_marker() {
        let result = Config::builder().quote_marker("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml_str("split_on_indent_change = true").unwrap();
        assert_eq!(config.quote_marker, "> ");
        assert!(config.split_on_indent_change);
    }

    #[test]
    fn test_from_toml_unknown_field() {
        let result = Config::from_toml_str("quote_depth = 3");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_from_toml_invalid_marker() {
        let result = Config::from_toml_str("quote_marker = \"\"");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "quote_marker = \">> \"").unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();
        assert_eq!(config.quote_marker, ">> ");
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/quotepara.toml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
