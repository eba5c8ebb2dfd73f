//! Linear scan of a text against an [`Automaton`]
//!
//! The matcher keeps no state between calls: the current automaton state
//! and the collected emits are locals, so one automaton can serve any
//! number of concurrent scans.

use crate::automaton::state::ROOT;
use crate::automaton::Automaton;
use crate::config::MatchOptions;
use crate::emit::Emit;
use crate::overlap::remove_overlaps;

/// Receiver for emits produced during a scan
pub trait EmitHandler {
    /// Handle one emit; return `false` to stop the scan
    fn emit(&mut self, emit: Emit) -> bool;
}

impl<F> EmitHandler for F
where
    F: FnMut(Emit) -> bool,
{
    fn emit(&mut self, emit: Emit) -> bool {
        self(emit)
    }
}

/// Handler collecting every emit it receives
#[derive(Debug, Default, Clone)]
pub struct EmitCollector {
    emits: Vec<Emit>,
}

impl EmitCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits collected so far
    pub fn emits(&self) -> &[Emit] {
        &self.emits
    }

    /// Take the collected emits
    pub fn into_emits(self) -> Vec<Emit> {
        self.emits
    }
}

impl EmitHandler for EmitCollector {
    fn emit(&mut self, emit: Emit) -> bool {
        self.emits.push(emit);
        true
    }
}

/// Feed every raw emit of `text` to `handler`.
///
/// Emits arrive ordered by end offset, ties by keyword registration order.
/// Returns `false` if the handler stopped the scan early.
pub fn scan_with<H>(automaton: &Automaton, text: &str, handler: &mut H) -> bool
where
    H: EmitHandler + ?Sized,
{
    if automaton.is_empty() {
        return true;
    }

    let mut current = ROOT;
    for (position, ch) in text.chars().enumerate() {
        current = automaton.next_state(current, automaton.normalize(ch));

        for &keyword_idx in automaton.outputs(current) {
            let keyword = automaton.keyword(keyword_idx);
            // A state at depth d is only reachable after d characters
            let start = position + 1 - keyword.char_len();
            if !handler.emit(Emit::new(start, position, keyword.original())) {
                return false;
            }
        }
    }

    true
}

/// Every occurrence of every keyword, overlapping and nested ones included
pub fn scan_raw(automaton: &Automaton, text: &str) -> Vec<Emit> {
    let mut collector = EmitCollector::new();
    scan_with(automaton, text, &mut collector);

    tracing::trace!(
        bytes = text.len(),
        emits = collector.emits().len(),
        "scanned text"
    );

    collector.into_emits()
}

/// Scan `text` and apply the post-processing selected by `options`.
///
/// With `stop_at_first_match` only the first raw emit is returned and the
/// word and overlap filters are skipped.
pub fn scan(automaton: &Automaton, text: &str, options: &MatchOptions) -> Vec<Emit> {
    if options.stop_at_first_match {
        let mut first = None;
        scan_with(automaton, text, &mut |emit: Emit| {
            first = Some(emit);
            false
        });
        return first.into_iter().collect();
    }

    let mut emits = scan_raw(automaton, text);

    if let Some(boundary) = options.word_boundary() {
        let chars: Vec<char> = text.chars().collect();
        emits = boundary.retain(&chars, emits);
    }

    if options.remove_overlaps {
        emits = remove_overlaps(emits);
    }

    emits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::build;

    fn raw(keywords: &[&str], text: &str) -> Vec<Emit> {
        scan_raw(&build(keywords.iter().copied(), false), text)
    }

    #[test]
    fn test_classic_ushers() {
        let emits = raw(&["he", "she", "his", "hers"], "ushers");
        assert_eq!(
            emits,
            vec![
                Emit::new(2, 3, "he"),
                Emit::new(1, 3, "she"),
                Emit::new(2, 5, "hers"),
            ]
        );
    }

    #[test]
    fn test_same_end_ordered_by_registration() {
        let emits = raw(&["she", "he", "e"], "she");
        assert_eq!(
            emits,
            vec![
                Emit::new(0, 2, "she"),
                Emit::new(1, 2, "he"),
                Emit::new(2, 2, "e"),
            ]
        );
    }

    #[test]
    fn test_repeated_keyword() {
        let emits = raw(&["AB"], "ABAB");
        assert_eq!(emits, vec![Emit::new(0, 1, "AB"), Emit::new(2, 3, "AB")]);
    }

    #[test]
    fn test_nested_keywords_report_independently() {
        let emits = raw(&["TRACT", "TRACT INFECTIONS"], "TRACT INFECTIONS");
        assert_eq!(
            emits,
            vec![Emit::new(0, 4, "TRACT"), Emit::new(0, 15, "TRACT INFECTIONS")]
        );
    }

    #[test]
    fn test_overlapping_self_matches() {
        let emits = raw(&["aa"], "aaaa");
        assert_eq!(
            emits,
            vec![
                Emit::new(0, 1, "aa"),
                Emit::new(1, 2, "aa"),
                Emit::new(2, 3, "aa"),
            ]
        );
    }

    #[test]
    fn test_offsets_are_characters() {
        let emits = raw(&["世界"], "こんにちは世界");
        assert_eq!(emits, vec![Emit::new(5, 6, "世界")]);
    }

    #[test]
    fn test_edge_inputs() {
        assert!(raw(&["abc"], "").is_empty());
        assert!(raw(&["abcdef"], "abc").is_empty());
        assert!(raw(&[], "anything at all").is_empty());
    }

    #[test]
    fn test_case_insensitive_keeps_registered_spelling() {
        let automaton = build(["Hello", "WORLD"], true);
        let emits = scan_raw(&automaton, "hello World, HELLO world");
        let keywords: Vec<&str> = emits.iter().map(|e| e.keyword()).collect();
        assert_eq!(keywords, vec!["Hello", "WORLD", "Hello", "WORLD"]);
        assert_eq!(emits[2], Emit::new(13, 17, "Hello"));
    }

    #[test]
    fn test_handler_can_stop() {
        let automaton = build(["a"], false);
        let mut seen = 0;
        let completed = scan_with(&automaton, "aaaa", &mut |_emit: Emit| {
            seen += 1;
            seen < 2
        });
        assert!(!completed);
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_scan_applies_options() {
        let automaton = build(["A", "AB"], false);
        let options = MatchOptions {
            remove_overlaps: true,
            ..Default::default()
        };
        assert_eq!(
            scan(&automaton, "AB", &options),
            vec![Emit::new(0, 1, "AB")]
        );
        assert_eq!(scan(&automaton, "AB", &MatchOptions::default()).len(), 2);
    }

    #[test]
    fn test_stop_at_first_match_skips_filters() {
        let automaton = build(["cat", "category"], false);
        let options = MatchOptions {
            stop_at_first_match: true,
            only_whole_words: true,
            remove_overlaps: true,
            ..Default::default()
        };
        // "cat" is not a whole word here, but filters do not run
        assert_eq!(
            scan(&automaton, "category", &options),
            vec![Emit::new(0, 2, "cat")]
        );
    }
}
