//! Splitting text into matched and unmatched pieces

use crate::emit::Emit;
use std::iter;

/// A piece of tokenized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'t> {
    /// Text between matches
    Fragment(&'t str),
    /// Text covered by a match
    Match {
        /// The matched slice of the input, as written in the input
        text: &'t str,
        /// The emit behind this token
        emit: Emit,
    },
}

impl<'t> Token<'t> {
    /// Slice of the input covered by this token
    pub fn text(&self) -> &'t str {
        match self {
            Token::Fragment(text) => text,
            Token::Match { text, .. } => text,
        }
    }

    /// Emit for match tokens
    pub fn emit(&self) -> Option<&Emit> {
        match self {
            Token::Fragment(_) => None,
            Token::Match { emit, .. } => Some(emit),
        }
    }

    /// Check if this token is a match
    pub fn is_match(&self) -> bool {
        matches!(self, Token::Match { .. })
    }
}

/// Partition `text` along `emits`.
///
/// Emits are taken by ascending start, longer first on equal starts; an
/// emit starting inside an already produced match token is skipped, so
/// concatenating the token texts always yields `text` again.
pub(crate) fn tokenize<'t>(text: &'t str, mut emits: Vec<Emit>) -> Vec<Token<'t>> {
    emits.sort_by(|a, b| a.start().cmp(&b.start()).then(b.end().cmp(&a.end())));

    // Byte offset of every character, plus the end of the text
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(iter::once(text.len()))
        .collect();
    let char_count = offsets.len() - 1;

    let mut tokens = Vec::with_capacity(emits.len() * 2 + 1);
    let mut cursor = 0;

    for emit in emits {
        if emit.start() < cursor || emit.end() >= char_count {
            continue;
        }
        if emit.start() > cursor {
            tokens.push(Token::Fragment(
                &text[offsets[cursor]..offsets[emit.start()]],
            ));
        }
        let matched = &text[offsets[emit.start()]..offsets[emit.end() + 1]];
        cursor = emit.end() + 1;
        tokens.push(Token::Match {
            text: matched,
            emit,
        });
    }

    if cursor < char_count {
        tokens.push(Token::Fragment(&text[offsets[cursor]..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'t>(tokens: &[Token<'t>]) -> Vec<&'t str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_fragments_between_matches() {
        let text = "the quick fox";
        let tokens = tokenize(text, vec![Emit::new(4, 8, "quick")]);

        assert_eq!(texts(&tokens), vec!["the ", "quick", " fox"]);
        assert!(!tokens[0].is_match());
        assert_eq!(tokens[1].emit(), Some(&Emit::new(4, 8, "quick")));
    }

    #[test]
    fn test_match_keeps_input_casing() {
        let text = "Say HELLO";
        let tokens = tokenize(text, vec![Emit::new(4, 8, "hello")]);
        assert_eq!(
            tokens[1],
            Token::Match {
                text: "HELLO",
                emit: Emit::new(4, 8, "hello"),
            }
        );
    }

    #[test]
    fn test_matches_at_edges() {
        let text = "abXab";
        let tokens = tokenize(text, vec![Emit::new(3, 4, "ab"), Emit::new(0, 1, "ab")]);
        assert_eq!(texts(&tokens), vec!["ab", "X", "ab"]);
        assert!(tokens[0].is_match() && tokens[2].is_match());
    }

    #[test]
    fn test_overlapping_emits_are_skipped() {
        let text = "ushers";
        let emits = vec![
            Emit::new(2, 3, "he"),
            Emit::new(1, 3, "she"),
            Emit::new(2, 5, "hers"),
        ];
        let tokens = tokenize(text, emits);
        assert_eq!(texts(&tokens), vec!["u", "she", "rs"]);
        assert_eq!(texts(&tokens).concat(), text);
    }

    #[test]
    fn test_multibyte_offsets() {
        let text = "日本語のテキスト";
        let tokens = tokenize(text, vec![Emit::new(4, 7, "テキスト")]);
        assert_eq!(texts(&tokens), vec!["日本語の", "テキスト"]);
    }

    #[test]
    fn test_no_emits() {
        assert_eq!(texts(&tokenize("plain", Vec::new())), vec!["plain"]);
        assert!(tokenize("", Vec::new()).is_empty());
    }
}
