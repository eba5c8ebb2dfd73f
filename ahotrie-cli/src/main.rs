//! ahotrie command-line entry point

use ahotrie_cli::commands::{Commands, ListCommands};
use ahotrie_cli::CliResult;
use clap::Parser;

/// Find every occurrence of many keywords in text files
#[derive(Debug, Parser)]
#[command(name = "ahotrie", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Formats => ahotrie_cli::commands::list_formats(),
        },
    }
}
