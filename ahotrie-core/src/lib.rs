//! Aho-Corasick multi-keyword matching
//!
//! This crate finds every occurrence of a set of keywords in a text with a
//! single linear pass over the text, then optionally post-processes the raw
//! occurrences: case folding, whole-word filtering, and overlap resolution
//! where the longest match wins.
//!
//! # Architecture
//!
//! - **Automaton**: trie over the keywords with fail links and precomputed
//!   output sets, stored in an index-based arena
//! - **Matcher**: stateless scan producing raw [`Emit`]s ordered by end
//!   offset
//! - **Filters**: whole-word boundaries and greedy longest-first overlap
//!   removal
//! - **Trie**: the automaton bundled with its [`MatchOptions`], exposing
//!   the query operations
//!
//! # Example
//!
//! ```rust
//! use ahotrie_core::Trie;
//!
//! let trie = Trie::builder()
//!     .ignore_case()
//!     .only_whole_words()
//!     .ignore_overlaps()
//!     .add_keyword("URINARY TRACT INFECTIONS")
//!     .add_keyword("URINARY")
//!     .build();
//!
//! let emits = trie.parse_text("history of urinary tract infections");
//! assert_eq!(emits.len(), 1);
//! assert_eq!(emits[0].start(), 11);
//! assert_eq!(emits[0].end(), 34);
//! assert_eq!(emits[0].keyword(), "URINARY TRACT INFECTIONS");
//! ```

#![warn(missing_docs)]

pub mod automaton;
pub mod config;
pub mod emit;
pub mod error;
pub mod filter;
pub mod keyword;
pub mod matcher;
pub mod overlap;
pub mod token;
pub mod trie;

// Re-export key types
pub use automaton::{build, Automaton};
pub use config::{KeywordConfig, MatchOptions, TrieBuilder};
pub use emit::{Emit, Interval};
pub use error::{Result, TrieError};
pub use filter::{filter_whitespace_separated, filter_whole_words, WordBoundary};
pub use keyword::{Keyword, KeywordSet};
pub use matcher::{scan, scan_raw, scan_with, EmitCollector, EmitHandler};
pub use overlap::remove_overlaps;
pub use token::Token;
pub use trie::Trie;
