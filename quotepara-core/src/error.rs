//! Error types for the configuration surface
//!
//! Line building and paragraph segmentation are total and never fail. Only
//! loading and validating a [`Config`](crate::Config) can produce an error.

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration value rejected by validation
    #[error("configuration error: {0}")]
    Configuration(String),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
