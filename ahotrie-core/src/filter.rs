//! Whole-word filtering of raw emits
//!
//! Both filters are pure predicates over the scanned text; they know
//! nothing about overlaps and keep the input order.

use crate::emit::Emit;

/// Which neighbouring characters count as a word boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordBoundary {
    /// Any character that is not alphanumeric
    NonAlphanumeric,
    /// Whitespace only
    Whitespace,
}

impl WordBoundary {
    /// Check if `ch` may sit next to a match
    #[inline]
    pub fn is_boundary(self, ch: char) -> bool {
        match self {
            WordBoundary::NonAlphanumeric => !is_word_char(ch),
            WordBoundary::Whitespace => ch.is_whitespace(),
        }
    }

    /// Check the characters right before and after `emit`.
    ///
    /// `chars` must be the characters of the text the emit came from.
    pub fn accepts(self, chars: &[char], emit: &Emit) -> bool {
        let before_ok = emit.start() == 0
            || chars
                .get(emit.start() - 1)
                .map_or(true, |&ch| self.is_boundary(ch));
        let after_ok = chars
            .get(emit.end() + 1)
            .map_or(true, |&ch| self.is_boundary(ch));

        before_ok && after_ok
    }

    /// Keep the emits accepted by [`WordBoundary::accepts`]
    pub fn retain(self, chars: &[char], mut emits: Vec<Emit>) -> Vec<Emit> {
        emits.retain(|emit| self.accepts(chars, emit));
        emits
    }
}

/// Word characters are letters and digits
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Drop emits that touch a word character on either side
pub fn filter_whole_words(text: &str, emits: Vec<Emit>) -> Vec<Emit> {
    let chars: Vec<char> = text.chars().collect();
    WordBoundary::NonAlphanumeric.retain(&chars, emits)
}

/// Drop emits that are not surrounded by whitespace or the text edges
pub fn filter_whitespace_separated(text: &str, emits: Vec<Emit>) -> Vec<Emit> {
    let chars: Vec<char> = text.chars().collect();
    WordBoundary::Whitespace.retain(&chars, emits)
}
