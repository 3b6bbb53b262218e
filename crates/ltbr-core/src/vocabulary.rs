//! Vocabulary store: ordered, duplicate-free list of sanitized words.

use crate::corpus::sanitize_word;

/// Insertion-ordered word list with set semantics and a selection cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    selected: usize,
}

impl Vocabulary {
    /// Restores a persisted list. Duplicates are kept out.
    pub fn from_words(words: Vec<String>) -> Self {
        let mut vocabulary = Self::default();
        for word in words {
            if !word.is_empty() && !vocabulary.contains(&word) {
                vocabulary.words.push(word);
            }
        }
        vocabulary
    }

    /// Sanitizes and appends `word`.
    ///
    /// Returns the stored form, or `None` when the word sanitizes to nothing
    /// or is already present.
    pub fn add(&mut self, word: &str) -> Option<String> {
        let sanitized = sanitize_word(word);
        if sanitized.is_empty() || self.contains(&sanitized) {
            return None;
        }
        self.words.push(sanitized.clone());
        Some(sanitized)
    }

    /// Removes the entry at `index`; out-of-range indices are a no-op.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index >= self.words.len() {
            return None;
        }
        let removed = self.words.remove(index);
        self.clamp_selection();
        Some(removed)
    }

    pub fn delete_selected(&mut self) -> Option<String> {
        self.delete(self.selected)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.words.get(self.selected).map(String::as_str)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.words.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sanitizes_and_dedups() {
        let mut vocab = Vocabulary::default();
        assert_eq!(vocab.add("hello,"), Some("hello".to_string()));
        assert_eq!(vocab.add("hello"), None);
        assert_eq!(vocab.add("(hello)"), None);
        assert_eq!(vocab.words(), &["hello"]);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut vocab = Vocabulary::default();
        vocab.add("Casa");
        vocab.add("casa");
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_add_ignores_punctuation_only_tokens() {
        let mut vocab = Vocabulary::default();
        assert_eq!(vocab.add("—"), None);
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_delete_keeps_order_and_clamps_selection() {
        let mut vocab = Vocabulary::from_words(vec!["a".into(), "b".into(), "c".into()]);
        vocab.select(2);
        assert_eq!(vocab.delete(2), Some("c".to_string()));
        assert_eq!(vocab.words(), &["a", "b"]);
        assert_eq!(vocab.selected(), 1);

        assert_eq!(vocab.delete(0), Some("a".to_string()));
        assert_eq!(vocab.words(), &["b"]);
        assert_eq!(vocab.selected(), 0);

        vocab.delete(0);
        assert!(vocab.is_empty());
        assert_eq!(vocab.selected(), 0);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut vocab = Vocabulary::from_words(vec!["a".into()]);
        assert_eq!(vocab.delete(3), None);
        assert_eq!(vocab.len(), 1);

        let mut empty = Vocabulary::default();
        assert_eq!(empty.delete_selected(), None);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut vocab = Vocabulary::from_words(vec!["a".into(), "b".into()]);
        vocab.select_prev();
        assert_eq!(vocab.selected(), 0);
        vocab.select_next();
        vocab.select_next();
        assert_eq!(vocab.selected(), 1);
        assert_eq!(vocab.selected_word(), Some("b"));
    }

    #[test]
    fn test_from_words_drops_duplicates() {
        let vocab = Vocabulary::from_words(vec!["x".into(), "y".into(), "x".into()]);
        assert_eq!(vocab.words(), &["x", "y"]);
    }
}
