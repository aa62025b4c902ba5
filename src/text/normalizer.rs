//! # Text Normalizer
//!
//! Cleaning, tokenization, stopword filtering and lemmatization of raw
//! text. The output is the diagnostic `processed_text` shown to callers;
//! the valence scorer never consumes it, because case and punctuation
//! carry sentiment signal that this pipeline strips.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::text::{Lemmatizer, Stopwords};

/// Output of the normalization pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Lemmatized, stopword-free rendition of the input
    pub processed_text: String,
    /// Surviving tokens after cleanup and stopword removal
    pub tokens: Vec<String>,
    /// Lemmatized form of each surviving token
    pub lemmas: Vec<String>,
    /// Stemmed form of each surviving token
    pub stems: Vec<String>,
}

impl Normalized {
    fn empty() -> Self {
        Self {
            processed_text: String::new(),
            tokens: Vec::new(),
            lemmas: Vec::new(),
            stems: Vec::new(),
        }
    }
}

/// Text normalizer with compiled cleanup patterns
pub struct TextNormalizer {
    /// Regex for URL removal
    url_regex: Regex,
    /// Regex for email removal
    email_regex: Regex,
    /// Regex for characters outside the allowed set
    noise_regex: Regex,
    /// Regex for multiple whitespace
    whitespace_regex: Regex,
    /// Regex for word tokens
    word_regex: Regex,
    /// Stopword set
    stopwords: Stopwords,
    /// Lemmatizer for the diagnostic output
    lemmatizer: Lemmatizer,
}

impl TextNormalizer {
    /// Create a normalizer from already-loaded dictionaries
    pub fn new(stopwords: Stopwords, lemmatizer: Lemmatizer) -> Self {
        Self {
            url_regex: Regex::new(r"http\S+|www\S+").unwrap(),
            email_regex: Regex::new(r"\S+@\S+").unwrap(),
            noise_regex: Regex::new(r"[^\w\s.!?,-]").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            word_regex: Regex::new(r"\w+").unwrap(),
            stopwords,
            lemmatizer,
        }
    }

    /// Create a normalizer with the bundled stopword and lemma assets
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(Stopwords::bundled()?, Lemmatizer::bundled()?))
    }

    /// Normalize raw text for diagnostic display
    ///
    /// Steps, in order:
    /// 1. Unicode NFC + lowercase
    /// 2. Remove URLs and email addresses
    /// 3. Strip characters outside `[\w\s.!?,-]`
    /// 4. Collapse whitespace and trim
    /// 5. Tokenize into words (punctuation-only tokens excluded)
    /// 6. Remove stopwords
    /// 7. Lemmatize survivors and join with single spaces
    ///
    /// Never fails: empty or unrecognizable input yields empty output.
    pub fn normalize(&self, raw: &str) -> Normalized {
        if raw.trim().is_empty() {
            return Normalized::empty();
        }

        let lowered: String = raw.nfc().collect::<String>().to_lowercase();
        let no_urls = self.url_regex.replace_all(&lowered, "");
        let no_emails = self.email_regex.replace_all(&no_urls, "");
        let cleaned = self.noise_regex.replace_all(&no_emails, "");
        let collapsed = self.whitespace_regex.replace_all(&cleaned, " ");
        let text = collapsed.trim();

        let tokens: Vec<String> = self
            .word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        let lemmas: Vec<String> = tokens
            .iter()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect();
        let stems: Vec<String> = tokens
            .iter()
            .map(|token| self.lemmatizer.stem(token))
            .collect();

        Normalized {
            processed_text: lemmas.join(" "),
            tokens,
            lemmas,
            stems,
        }
    }
}
