//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# quotepara configuration

[parsing]
# Literal marker that introduces one quote level. A line's indent is the
# number of markers in front of its text; lines without markers continue
# at the previous line's indent.
quote_marker = "> "

[segmentation]
# Blank lines always separate paragraphs. When enabled, a change of indent
# between two adjacent non-blank lines starts a new paragraph as well.
split_on_indent_change = false

[output]
# One of "text", "json", "markdown"
default_format = "text"
pretty_json = true

[performance]
# Worker threads used with --parallel (0 = one per CPU)
worker_threads = 0
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   quotepara validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   quotepara process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("quotepara.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("quotepara.toml"));
    }

    #[test]
    fn test_template_matches_defaults() {
        let config = CliConfig::from_toml_str(TEMPLATE).unwrap();
        let defaults = CliConfig::default();

        assert_eq!(config.parsing.quote_marker, defaults.parsing.quote_marker);
        assert_eq!(
            config.segmentation.split_on_indent_change,
            defaults.segmentation.split_on_indent_change
        );
        assert_eq!(config.output.default_format, defaults.output.default_format);
        assert_eq!(
            config.performance.worker_threads,
            defaults.performance.worker_threads
        );
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("quotepara.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());

        let config = CliConfig::from_file(&output_path).unwrap();
        assert!(config.core_config().is_ok());
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/quotepara.toml"),
        };

        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("Failed to write"));
    }
}
