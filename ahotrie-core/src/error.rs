//! Error types for trie construction and configuration loading
//!
//! Construction and scanning are infallible: any set of strings builds an
//! [`Automaton`](crate::Automaton). Failures come from loading keyword
//! configuration and from decoding match records.

use thiserror::Error;

/// Errors surfaced while loading keyword sets or decoding emits
#[derive(Error, Debug)]
pub enum TrieError {
    /// A value the matcher cannot represent, such as an inverted emit span
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },

    /// Malformed keyword configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading a keyword set
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrieError {
    /// Shorthand for [`TrieError::InvalidArgument`]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        TrieError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for TrieError {
    fn from(err: toml::de::Error) -> Self {
        TrieError::Config(err.to_string())
    }
}

/// Result type for trie operations
pub type Result<T> = std::result::Result<T, TrieError>;
