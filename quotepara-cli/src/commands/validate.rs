//! Validate command implementation

use crate::commands::process::OutputFormat;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok((config, format)) => {
                println!("✓ Configuration is valid!");
                println!("  Quote marker: {:?}", config.parsing.quote_marker);
                println!(
                    "  Split on indent change: {}",
                    config.segmentation.split_on_indent_change
                );
                println!("  Default format: {:?}", format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    fn check(path: &std::path::Path) -> Result<(CliConfig, OutputFormat)> {
        let config = CliConfig::from_file(path)?;
        config.core_config()?;
        let format = OutputFormat::from_name(&config.output.default_format)?;
        Ok((config, format))
    }
}
