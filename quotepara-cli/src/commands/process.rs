//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use quotepara_core::{Config, LineBuilder, Paragraph, ParagraphSegmenter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "QUOTEPARA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Quote marker counted for indent (overrides config)
    #[arg(short, long, value_name = "MARKER")]
    pub marker: Option<String>,

    /// Start a new paragraph whenever the quote depth changes
    #[arg(short, long)]
    pub split_on_indent: bool,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Re-quoted paragraphs separated by blank lines
    Text,
    /// JSON array of files with paragraphs and indent-tagged lines
    Json,
    /// Markdown sections with nested blockquotes
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::UnknownFormat(name.to_string()).into())
    }
}

/// Paragraphs computed for one input file
#[derive(Debug)]
struct ProcessedFile {
    source: String,
    paragraphs: Vec<Paragraph>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting paragraph processing");
        log::debug!("Arguments: {:?}", self);

        let cli_config = self.load_config()?;
        let config = self.core_config(&cli_config)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} files", files.len());

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let processed = if self.parallel && files.len() > 1 {
            self.process_parallel(&files, &config, &cli_config, &progress)?
        } else {
            files
                .iter()
                .map(|path| process_file(path, &config, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut formatter = self.create_formatter(format, &config, &cli_config, files.len() > 1)?;
        for file in &processed {
            formatter.format_entry(&file.source, &file.paragraphs)?;
        }
        formatter.finish()?;

        log::info!("Processing complete");
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::from_file(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Merge command-line overrides into the file configuration
    fn core_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let file_config = cli_config.core_config()?;
        let mut builder = Config::builder()
            .quote_marker(file_config.quote_marker)
            .split_on_indent_change(file_config.split_on_indent_change || self.split_on_indent);

        if let Some(marker) = &self.marker {
            builder = builder.quote_marker(marker.clone());
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    fn process_parallel(
        &self,
        files: &[PathBuf],
        config: &Config,
        cli_config: &CliConfig,
        progress: &ProgressReporter,
    ) -> Result<Vec<ProcessedFile>> {
        let threads = match (self.threads, cli_config.performance.worker_threads) {
            (Some(n), _) => n,
            (None, 0) => num_cpus::get(),
            (None, n) => n,
        };
        log::debug!("Using {} worker threads", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        // Collecting into a Vec keeps input order
        pool.install(|| {
            files
                .par_iter()
                .map(|path| process_file(path, config, progress))
                .collect()
        })
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        config: &Config,
        cli_config: &CliConfig,
        show_headers: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(
                TextFormatter::new(writer, config.quote_marker.clone()).with_headers(show_headers),
            ),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }
}

fn process_file(path: &Path, config: &Config, progress: &ProgressReporter) -> Result<ProcessedFile> {
    let source = path.display().to_string();
    let entry = FileReader::read_entry(path, &LineBuilder::with_config(config.clone()))?;
    let paragraphs = ParagraphSegmenter::with_config(config).segment(entry.lines());

    log::info!(
        "{}: {} lines, {} paragraphs",
        source,
        entry.len(),
        paragraphs.len()
    );
    progress.file_completed(&source);

    Ok(ProcessedFile { source, paragraphs })
}
