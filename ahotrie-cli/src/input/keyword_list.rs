//! Plain-text keyword lists

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Keywords from a list with one keyword per line.
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with
/// `#` are skipped.
pub fn parse_keywords(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse a keyword list file
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword list: {}", path.display()))?;
    let keywords = parse_keywords(&source);
    log::debug!("Loaded {} keyword(s) from {}", keywords.len(), path.display());
    Ok(keywords)
}
