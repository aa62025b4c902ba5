//! # Stopwords
//!
//! Static English stopword set, parsed once from the bundled word list.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Bundled English stopword list
const STOPWORDS_DATA: &str = include_str!("../../data/stopwords.txt");

/// Immutable set of high-frequency low-information words
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Parse the bundled stopword list
    pub fn bundled() -> Result<Self> {
        Self::from_lines(STOPWORDS_DATA)
    }

    /// Build a set from an arbitrary word list (one word per line)
    pub fn from_lines(data: &str) -> Result<Self> {
        let words: HashSet<String> = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|word| word.to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(Error::asset("stopwords", "word list is empty"));
        }

        tracing::debug!(count = words.len(), "loaded stopword set");
        Ok(Self { words })
    }

    /// Check membership (case-insensitive; callers pass lowercased tokens)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_loads() {
        let stopwords = Stopwords::bundled().unwrap();
        assert!(stopwords.len() > 100);
    }

    #[test]
    fn test_common_stopwords_present() {
        let stopwords = Stopwords::bundled().unwrap();
        for word in ["the", "is", "and", "this", "i", "not"] {
            assert!(stopwords.contains(word), "missing stopword: {word}");
        }
    }

    #[test]
    fn test_content_words_absent() {
        let stopwords = Stopwords::bundled().unwrap();
        for word in ["love", "terrible", "weather", "absolutely"] {
            assert!(!stopwords.contains(word), "unexpected stopword: {word}");
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(Stopwords::from_lines("# only a comment\n").is_err());
    }
}
