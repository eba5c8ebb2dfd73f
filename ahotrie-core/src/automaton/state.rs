//! Arena-backed trie states

use smallvec::SmallVec;
use std::collections::HashMap;

/// Index of a state inside the automaton arena
pub(crate) type StateId = usize;

/// The root state is always the first arena slot
pub(crate) const ROOT: StateId = 0;

/// One trie node.
///
/// Children are owned through the arena; `fail` is a plain index and is
/// never followed for ownership.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    /// Length of the path from the root
    pub(crate) depth: usize,
    /// Goto transitions
    pub(crate) transitions: HashMap<char, StateId>,
    /// Longest proper suffix state (root fails to itself)
    pub(crate) fail: StateId,
    /// Keyword indices reported here, including the whole fail chain,
    /// sorted ascending
    pub(crate) outputs: SmallVec<[usize; 2]>,
}

impl State {
    pub(crate) fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    #[inline]
    pub(crate) fn transition(&self, ch: char) -> Option<StateId> {
        self.transitions.get(&ch).copied()
    }
}
