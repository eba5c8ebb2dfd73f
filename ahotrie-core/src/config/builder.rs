//! Fluent trie construction

use crate::automaton::build;
use crate::config::MatchOptions;
use crate::trie::Trie;

/// Fluent builder collecting keywords and options for a [`Trie`]
#[derive(Debug, Default, Clone)]
pub struct TrieBuilder {
    options: MatchOptions,
    keywords: Vec<String>,
}

impl TrieBuilder {
    /// Create a builder with every option off
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Match regardless of letter case
    pub fn ignore_case(mut self) -> Self {
        self.options.case_insensitive = true;
        self
    }

    /// Only report matches bounded by non-alphanumeric characters
    pub fn only_whole_words(mut self) -> Self {
        self.options.only_whole_words = true;
        self
    }

    /// Only report matches bounded by whitespace
    pub fn only_whole_words_whitespace_separated(mut self) -> Self {
        self.options.only_whole_words_whitespace_separated = true;
        self
    }

    /// Resolve overlapping matches, longest first
    pub fn ignore_overlaps(mut self) -> Self {
        self.options.remove_overlaps = true;
        self
    }

    /// Stop scanning at the first raw match
    pub fn stop_on_hit(mut self) -> Self {
        self.options.stop_at_first_match = true;
        self
    }

    /// Register one keyword
    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Register several keywords
    pub fn add_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Build the trie; empty keywords are skipped
    pub fn build(self) -> Trie {
        let automaton = build(&self.keywords, self.options.case_insensitive);
        Trie::new(automaton, self.options)
    }
}
