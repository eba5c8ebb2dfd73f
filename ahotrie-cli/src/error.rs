//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Neither flags, keyword files nor the config file supplied a keyword
    NoKeywords,
    /// No input pattern resolved to a readable file
    NoFilesMatched(Vec<String>),
    /// Thread count of zero
    InvalidThreadCount(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoKeywords => write!(
                f,
                "No keywords given: use --keyword, --keywords-file or a config file"
            ),
            CliError::NoFilesMatched(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidThreadCount(count) => {
                write!(f, "Invalid thread count: {count} (must be at least 1)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
