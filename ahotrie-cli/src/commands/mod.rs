//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use std::io::{self, Write};

pub mod scan;

pub use scan::{OutputFormat, ScanArgs};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan text files for keyword occurrences
    Scan(ScanArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

/// Print the supported output formats, one per line
pub fn list_formats() -> Result<()> {
    write_formats(&mut io::stdout().lock())
}

fn write_formats<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available output formats:")?;
    for format in OutputFormat::value_variants() {
        if let Some(value) = format.to_possible_value() {
            let help = value.get_help().map(ToString::to_string).unwrap_or_default();
            writeln!(writer, "  {:<10} {}", value.get_name(), help)?;
        }
    }
    Ok(())
}
