//! arli command-line entry point

use arli_cli::commands::Commands;
use arli_cli::CliResult;
use clap::Parser;

/// Localize digits, dates, separators and punctuation into Arabic-script forms
#[derive(Debug, Parser)]
#[command(name = "arli", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
