//! Goto/fail construction
//!
//! Builds the arena in two passes: keyword paths are inserted into the
//! trie, then a breadth-first walk assigns fail links and merges every
//! state's output set with the output set of its fail target.

use super::state::{State, StateId, ROOT};
use crate::keyword::KeywordSet;
use std::collections::VecDeque;

/// Build the complete state arena for `keywords`
pub(crate) fn build_states(keywords: &KeywordSet) -> Vec<State> {
    let mut states = vec![State::default()];

    for (idx, keyword) in keywords.iter().enumerate() {
        insert_path(&mut states, keyword.normalized(), idx);
    }

    link_failures(&mut states);
    states
}

/// Insert one keyword path, marking its terminal state
fn insert_path(states: &mut Vec<State>, normalized: &str, keyword_idx: usize) {
    let mut current = ROOT;

    for ch in normalized.chars() {
        current = match states[current].transition(ch) {
            Some(next) => next,
            None => {
                let next = states.len();
                let depth = states[current].depth + 1;
                states.push(State::with_depth(depth));
                states[current].transitions.insert(ch, next);
                next
            }
        };
    }

    states[current].outputs.push(keyword_idx);
}

/// Breadth-first fail link assignment with output propagation.
///
/// A state is only dequeued after every shallower state has its final
/// output set, so copying the fail target's outputs is enough.
fn link_failures(states: &mut [State]) {
    let mut queue: VecDeque<StateId> = VecDeque::new();

    let root_children: Vec<StateId> = states[ROOT].transitions.values().copied().collect();
    for child in root_children {
        states[child].fail = ROOT;
        queue.push_back(child);
    }

    while let Some(state) = queue.pop_front() {
        let edges: Vec<(char, StateId)> = states[state]
            .transitions
            .iter()
            .map(|(&ch, &child)| (ch, child))
            .collect();

        for (ch, child) in edges {
            let fail = resolve_fail(states, states[state].fail, ch);
            states[child].fail = fail;

            let inherited = states[fail].outputs.clone();
            let outputs = &mut states[child].outputs;
            outputs.extend(inherited);
            outputs.sort_unstable();

            queue.push_back(child);
        }
    }
}

/// Follow the fail chain from `start` until a transition on `ch` exists
fn resolve_fail(states: &[State], start: StateId, ch: char) -> StateId {
    let mut fallback = start;
    loop {
        if let Some(next) = states[fallback].transition(ch) {
            return next;
        }
        if fallback == ROOT {
            return ROOT;
        }
        fallback = states[fallback].fail;
    }
}
