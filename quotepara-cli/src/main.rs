//! quotepara command-line entry point

use clap::Parser;
use quotepara_cli::commands::Commands;
use quotepara_cli::CliResult;

/// Infer quote depth and split quoted text into paragraphs
#[derive(Debug, Parser)]
#[command(name = "quotepara", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
