//! Keyword registry and case folding

use std::collections::HashMap;

/// Fold a single character to its matching form.
///
/// Only single-character lower-case mappings are applied. Characters whose
/// lower-case form expands to several characters (e.g. `'İ'`) are kept as
/// is, so character offsets in folded text always line up with the input.
#[inline]
pub fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Fold a whole string with [`fold_char`]
pub fn fold_str(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// A registered keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    original: String,
    normalized: String,
    char_len: usize,
}

impl Keyword {
    fn new(original: &str, case_insensitive: bool) -> Self {
        let normalized = if case_insensitive {
            fold_str(original)
        } else {
            original.to_string()
        };
        let char_len = normalized.chars().count();

        Self {
            original: original.to_string(),
            normalized,
            char_len,
        }
    }

    /// Keyword text as registered
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Keyword text used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

/// Deduplicated keywords in registration order.
///
/// Two keywords whose normalized forms are equal collapse into one entry;
/// the first registration keeps its original spelling.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
    index: HashMap<String, usize>,
    case_insensitive: bool,
}

impl KeywordSet {
    /// Create an empty keyword set
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            keywords: Vec::new(),
            index: HashMap::new(),
            case_insensitive,
        }
    }

    /// Register a keyword, returning its index and whether it was new.
    ///
    /// The empty string matches nowhere and is skipped, returning `None`.
    pub fn insert(&mut self, keyword: &str) -> Option<(usize, bool)> {
        if keyword.is_empty() {
            tracing::debug!(position = self.keywords.len(), "skipping empty keyword");
            return None;
        }

        let keyword = Keyword::new(keyword, self.case_insensitive);
        if let Some(&existing) = self.index.get(keyword.normalized()) {
            return Some((existing, false));
        }

        let idx = self.keywords.len();
        self.index.insert(keyword.normalized.clone(), idx);
        self.keywords.push(keyword);
        Some((idx, true))
    }

    /// Whether keywords are folded before matching
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Keyword at `idx`
    pub fn get(&self, idx: usize) -> Option<&Keyword> {
        self.keywords.get(idx)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if no keyword has been registered
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate keywords in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub(crate) fn keywords_slice(&self) -> &[Keyword] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_char_keeps_length() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('Ä'), 'ä');
        assert_eq!(fold_char('7'), '7');
        // Lower-cases to two characters, so it stays untouched
        assert_eq!(fold_char('İ'), 'İ');
        assert_eq!(fold_str("İstanbul").chars().count(), 8);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut set = KeywordSet::new(true);
        assert_eq!(set.insert("Urinary"), Some((0, true)));
        assert_eq!(set.insert("URINARY"), Some((0, false)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().original(), "Urinary");
        assert_eq!(set.get(0).unwrap().normalized(), "urinary");
    }

    #[test]
    fn test_case_sensitive_keeps_variants() {
        let mut set = KeywordSet::new(false);
        set.insert("abc");
        set.insert("ABC");
        assert_eq!(set.len(), 2);
        assert!(!set.is_case_insensitive());
    }

    #[test]
    fn test_empty_keyword_skipped() {
        let mut set = KeywordSet::new(false);
        assert_eq!(set.insert(""), None);
        assert!(set.is_empty());

        assert_eq!(set.insert("URINARY"), Some((0, true)));
        assert_eq!(set.insert(""), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_char_len_counts_characters() {
        let mut set = KeywordSet::new(false);
        set.insert("日本語");
        assert_eq!(set.get(0).unwrap().char_len(), 3);
    }
}
