//! Construction tests for the automaton

use super::state::{StateId, ROOT};
use super::*;
use crate::matcher::scan_raw;

/// Walk goto transitions only (no fail links) along `path`
fn state_of(automaton: &Automaton, path: &str) -> StateId {
    path.chars().fold(ROOT, |current, ch| {
        automaton
            .state(current)
            .transition(ch)
            .unwrap_or_else(|| panic!("no transition on {ch:?} while walking {path:?}"))
    })
}

fn classic() -> Automaton {
    build(["he", "she", "his", "hers"], false)
}

#[test]
fn test_trie_shape() {
    let automaton = classic();
    // root + h, he, her, hers, hi, his, s, sh, she
    assert_eq!(automaton.state_count(), 10);
    assert_eq!(automaton.keywords().len(), 4);
    assert_eq!(automaton.state(state_of(&automaton, "hers")).depth, 4);
}

#[test]
fn test_fail_links() {
    let automaton = classic();

    let she = state_of(&automaton, "she");
    let he = state_of(&automaton, "he");
    assert_eq!(automaton.state(she).fail, he);

    let sh = state_of(&automaton, "sh");
    let h = state_of(&automaton, "h");
    assert_eq!(automaton.state(sh).fail, h);

    let his = state_of(&automaton, "his");
    let s = state_of(&automaton, "s");
    assert_eq!(automaton.state(his).fail, s);

    assert_eq!(automaton.state(h).fail, ROOT);
    assert_eq!(automaton.state(ROOT).fail, ROOT);
}

#[test]
fn test_outputs_include_fail_chain() {
    let automaton = classic();

    // "she" reports itself and its suffix "he", in registration order
    assert_eq!(automaton.outputs(state_of(&automaton, "she")), &[0, 1]);
    assert_eq!(automaton.outputs(state_of(&automaton, "he")), &[0]);
    assert_eq!(automaton.outputs(state_of(&automaton, "hers")), &[3]);
    assert!(automaton.outputs(state_of(&automaton, "sh")).is_empty());
    assert!(automaton.outputs(ROOT).is_empty());
}

#[test]
fn test_fail_links_point_shallower() {
    let automaton = build(
        ["abcab", "bcabc", "cab", "abab", "b", "a", "aaaa"],
        false,
    );

    for id in 1..automaton.state_count() {
        let state = automaton.state(id);
        assert!(
            automaton.state(state.fail).depth < state.depth,
            "state {id} fails to a state that is not shallower"
        );
    }
}

#[test]
fn test_next_state_follows_fail_chain() {
    let automaton = classic();
    let sh = state_of(&automaton, "sh");
    // "sh" + 'i' has no goto edge; falls back to "h" and continues to "hi"
    assert_eq!(automaton.next_state(sh, 'i'), state_of(&automaton, "hi"));
    // Unknown character always lands on the root
    assert_eq!(automaton.next_state(sh, 'z'), ROOT);
    assert_eq!(automaton.next_state(ROOT, 'z'), ROOT);
}

#[test]
fn test_empty_keyword_set() {
    let automaton = build(Vec::<String>::new(), false);
    assert!(automaton.is_empty());
    assert_eq!(automaton.state_count(), 1);
}

#[test]
fn test_empty_keyword_is_skipped() {
    let with_empty = build(["URINARY", ""], true);
    let without = build(["URINARY"], true);

    assert_eq!(with_empty.keywords().len(), 1);
    assert_eq!(with_empty.state_count(), without.state_count());
    // The root never reports a match
    assert!(with_empty.outputs(ROOT).is_empty());

    let text = "Urinary tract, urinary";
    assert_eq!(scan_raw(&with_empty, text), scan_raw(&without, text));
    assert_eq!(scan_raw(&with_empty, text).len(), 2);
}

#[test]
fn test_only_empty_keywords() {
    let automaton = build(["", ""], false);
    assert!(automaton.is_empty());
    assert!(scan_raw(&automaton, "anything").is_empty());
}

#[test]
fn test_case_insensitive_folds_keywords() {
    let automaton = build(["HeLLo"], true);
    assert!(automaton.is_case_insensitive());
    let end = state_of(&automaton, "hello");
    assert_eq!(automaton.outputs(end), &[0]);
    assert_eq!(automaton.keyword(0).original(), "HeLLo");
    assert_eq!(automaton.normalize('L'), 'l');
}

#[test]
fn test_duplicate_keywords_share_state() {
    let automaton = build(["abc", "ABC", "abc"], true);
    assert_eq!(automaton.keywords().len(), 1);
    assert_eq!(automaton.state_count(), 4);
}
