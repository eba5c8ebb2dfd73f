//! Aho-Corasick automaton
//!
//! The automaton is a trie over the normalized keywords with a fail link on
//! every state and precomputed output sets. States live in a flat arena and
//! refer to each other by index, so fail links never form ownership cycles
//! and dropping the automaton simply drops the arena.
//!
//! An [`Automaton`] is immutable once built and can be shared between
//! threads; all per-scan progress lives in the matcher's locals.

mod construction;
pub(crate) mod state;

#[cfg(test)]
mod tests;

use crate::keyword::{fold_char, Keyword, KeywordSet};
use state::{State, StateId, ROOT};

/// Trie with failure links and output sets
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    keywords: KeywordSet,
}

/// Build an automaton from raw keyword strings.
///
/// Duplicates (after case folding, when `case_insensitive` is set) collapse
/// into their first registration. Empty strings can never match and are
/// skipped, so construction accepts any set of strings.
pub fn build<I, S>(keywords: I, case_insensitive: bool) -> Automaton
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = KeywordSet::new(case_insensitive);
    for keyword in keywords {
        set.insert(keyword.as_ref());
    }
    Automaton::new(set)
}

impl Automaton {
    /// Build the automaton for a finalized keyword set
    pub fn new(keywords: KeywordSet) -> Self {
        let states = construction::build_states(&keywords);

        tracing::debug!(
            keywords = keywords.len(),
            states = states.len(),
            case_insensitive = keywords.is_case_insensitive(),
            "built automaton"
        );

        Self { states, keywords }
    }

    /// Registered keywords
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Whether keywords and scanned text are case folded
    pub fn is_case_insensitive(&self) -> bool {
        self.keywords.is_case_insensitive()
    }

    /// Number of trie states, root included
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Check if the automaton can never report a match
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Map a text character to the form used on transitions
    #[inline]
    pub(crate) fn normalize(&self, ch: char) -> char {
        if self.is_case_insensitive() {
            fold_char(ch)
        } else {
            ch
        }
    }

    /// Goto/fail step for one (already normalized) character
    #[inline]
    pub(crate) fn next_state(&self, mut current: StateId, ch: char) -> StateId {
        loop {
            let state = &self.states[current];
            if let Some(next) = state.transition(ch) {
                return next;
            }
            if current == ROOT {
                return ROOT;
            }
            current = state.fail;
        }
    }

    /// Keyword indices reported at `state`, ascending
    #[inline]
    pub(crate) fn outputs(&self, state: StateId) -> &[usize] {
        &self.states[state].outputs
    }

    #[inline]
    pub(crate) fn keyword(&self, idx: usize) -> &Keyword {
        // Output sets only ever hold indices handed out by the keyword set
        &self.keywords.keywords_slice()[idx]
    }

    #[cfg(test)]
    pub(crate) fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }
}
