//! Match configuration
//!
//! [`MatchOptions`] is the finalized option set the matcher consumes.
//! [`TrieBuilder`] collects keywords and flags fluently, and
//! [`KeywordConfig`] loads the same information from a TOML document.

mod builder;
mod file;
mod options;

pub use builder::TrieBuilder;
pub use file::KeywordConfig;
pub use options::MatchOptions;
