//! Automaton + options bundle exposing the query operations

use crate::automaton::Automaton;
use crate::config::{MatchOptions, TrieBuilder};
use crate::emit::Emit;
use crate::matcher::{scan, scan_with, EmitHandler};
use crate::token::{self, Token};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A built automaton together with its match options.
///
/// `Trie` is immutable and `Send + Sync`; share it by reference to scan
/// many texts concurrently.
#[derive(Debug, Clone)]
pub struct Trie {
    automaton: Automaton,
    options: MatchOptions,
}

impl Trie {
    /// Bundle an automaton with options.
    ///
    /// Case folding is decided when the automaton is built, so the
    /// automaton's setting replaces `options.case_insensitive`.
    pub fn new(automaton: Automaton, mut options: MatchOptions) -> Self {
        options.case_insensitive = automaton.is_case_insensitive();
        Self { automaton, options }
    }

    /// Start a fluent builder
    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    /// The underlying automaton
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// The options applied to every query
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// All matches in `text` after the configured filters
    pub fn parse_text(&self, text: &str) -> Vec<Emit> {
        scan(&self.automaton, text, &self.options)
    }

    /// Feed the filtered matches of `text` to `handler`.
    ///
    /// Without overlap removal the matches are streamed as the scan finds
    /// them; otherwise they are resolved first. Returns `false` if the
    /// handler stopped early.
    pub fn parse_text_with<H>(&self, text: &str, handler: &mut H) -> bool
    where
        H: EmitHandler + ?Sized,
    {
        if self.options.remove_overlaps || self.options.stop_at_first_match {
            return self
                .parse_text(text)
                .into_iter()
                .all(|emit| handler.emit(emit));
        }

        match self.options.word_boundary() {
            None => scan_with(&self.automaton, text, handler),
            Some(boundary) => {
                let chars: Vec<char> = text.chars().collect();
                scan_with(&self.automaton, text, &mut |emit: Emit| {
                    !boundary.accepts(&chars, &emit) || handler.emit(emit)
                })
            }
        }
    }

    /// First match of `text`.
    ///
    /// With overlap removal this is the leftmost surviving match; otherwise
    /// the scan stops at the first match passing the word filter.
    pub fn first_match(&self, text: &str) -> Option<Emit> {
        if self.options.remove_overlaps {
            return self.parse_text(text).into_iter().next();
        }

        let mut first = None;
        self.parse_text_with(text, &mut |emit: Emit| {
            first = Some(emit);
            false
        });
        first
    }

    /// Check if `text` contains at least one match
    pub fn contains_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// Split `text` into fragments and matches
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<Token<'t>> {
        token::tokenize(text, self.parse_text(text))
    }

    /// Parse independent texts in parallel against the shared automaton
    #[cfg(feature = "parallel")]
    pub fn parse_texts<S>(&self, texts: &[S]) -> Vec<Vec<Emit>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.parse_text(text.as_ref()))
            .collect()
    }
}
