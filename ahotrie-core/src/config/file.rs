//! TOML keyword set files
//!
//! ```toml
//! keywords = ["urinary tract infections", "urinary"]
//!
//! [options]
//! case_insensitive = true
//! remove_overlaps = true
//! ```

use crate::config::{MatchOptions, TrieBuilder};
use crate::error::{Result, TrieError};
use crate::trie::Trie;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keyword list and options loaded from a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Keywords in registration order
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Match options
    #[serde(default)]
    pub options: MatchOptions,
}

impl KeywordConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading keyword config");

        Self::from_toml_str(&source)
            .map_err(|e| TrieError::Config(format!("{}: {e}", path.display())))
    }

    /// Builder preloaded with this configuration
    pub fn to_builder(&self) -> TrieBuilder {
        TrieBuilder::new()
            .options(self.options)
            .add_keywords(self.keywords.iter().cloned())
    }

    /// Build a trie from this configuration; empty keywords are skipped
    pub fn build_trie(&self) -> Trie {
        self.to_builder().build()
    }
}
