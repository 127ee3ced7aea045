//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// No file matched any of the input patterns
    #[error("No files found matching: {0}")]
    NoFilesFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Output format name not recognised
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files_found_display() {
        let error = CliError::NoFilesFound("*.txt".to_string());
        assert_eq!(error.to_string(), "No files found matching: *.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_unknown_format_display() {
        let error = CliError::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("quote_marker must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: quote_marker must not be empty"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::UnknownFormat("yaml".to_string()).into());
        let error = failure.unwrap_err();

        assert!(error.downcast_ref::<CliError>().is_some());
        assert!(error.to_string().contains("yaml"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::InvalidPattern("lettere/“dante” 文件.txt[".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid file pattern: lettere/“dante” 文件.txt["
        );
    }
}
