//! Finalized match options

use crate::filter::WordBoundary;
use serde::{Deserialize, Serialize};

/// Post-processing switches applied by [`scan`](crate::scan).
///
/// All switches are off by default, which reports every raw occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Fold keywords and scanned text to lower case before matching
    pub case_insensitive: bool,
    /// Drop matches touching a letter or digit on either side
    pub only_whole_words: bool,
    /// Drop matches not surrounded by whitespace or the text edges
    pub only_whole_words_whitespace_separated: bool,
    /// Reduce overlapping matches, longest first
    pub remove_overlaps: bool,
    /// Return only the first raw match, skipping every filter
    pub stop_at_first_match: bool,
}

impl MatchOptions {
    /// Boundary rule to enforce, if any.
    ///
    /// The whitespace rule is stricter than the alphanumeric one, so it
    /// wins when both are set.
    pub fn word_boundary(&self) -> Option<WordBoundary> {
        if self.only_whole_words_whitespace_separated {
            Some(WordBoundary::Whitespace)
        } else if self.only_whole_words {
            Some(WordBoundary::NonAlphanumeric)
        } else {
            None
        }
    }
}
