//! ahotrie CLI library
//!
//! This library provides the command-line interface for scanning files
//! against a keyword set with the ahotrie Aho-Corasick matcher.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
