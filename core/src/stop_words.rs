use crate::tokenizer::split_into_words;
use std::collections::HashSet;

/// Terms ignored both when indexing and when querying.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Union the tokens of `text` into the set. Calls are cumulative.
    pub fn extend_from_text(&mut self, text: &str, separator: char) {
        self.words.extend(split_into_words(text, separator));
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Drop stop-words from `tokens`, keeping order and duplicates.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::DEFAULT_SEPARATOR;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn filters_and_preserves_order() {
        let mut stop = StopWords::new();
        stop.extend_from_text("and in", DEFAULT_SEPARATOR);
        let out = stop.filter(words(&["cat", "and", "dog", "in", "cat"]));
        assert_eq!(out, words(&["cat", "dog", "cat"]));
    }

    #[test]
    fn extend_is_cumulative() {
        let mut stop = StopWords::new();
        assert!(stop.is_empty());
        stop.extend_from_text("a", DEFAULT_SEPARATOR);
        stop.extend_from_text("b", DEFAULT_SEPARATOR);
        assert!(stop.contains("a"));
        assert!(stop.contains("b"));
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn empty_text_registers_empty_token() {
        let mut stop = StopWords::new();
        stop.extend_from_text("", DEFAULT_SEPARATOR);
        assert!(stop.contains(""));
        assert_eq!(stop.filter(words(&["", "x", ""])), words(&["x"]));
    }

    #[test]
    fn marker_is_part_of_the_token() {
        let mut stop = StopWords::new();
        stop.extend_from_text("dog", DEFAULT_SEPARATOR);
        assert_eq!(stop.filter(words(&["-dog", "dog"])), words(&["-dog"]));
    }
}
