//! # Lemmatizer
//!
//! Dictionary-plus-suffix-rule reduction of English words to base forms.
//! Irregular forms come from a bundled table; regular plurals are reduced
//! with morphological suffix rules. Output is diagnostic only and never
//! feeds the valence scorer.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Bundled irregular-form table
const LEMMAS_DATA: &str = include_str!("../../data/lemmas.tsv");

/// English lemmatizer backed by an irregular-form dictionary
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<String, String>,
}

impl Lemmatizer {
    /// Parse the bundled irregular-form table
    pub fn bundled() -> Result<Self> {
        Self::from_tsv(LEMMAS_DATA)
    }

    /// Build a lemmatizer from `form<TAB>lemma` lines
    pub fn from_tsv(data: &str) -> Result<Self> {
        let mut irregular = HashMap::new();

        for (line_no, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (form, lemma) = line.split_once('\t').ok_or_else(|| {
                Error::asset("lemmas", format!("line {}: expected form<TAB>lemma", line_no + 1))
            })?;
            irregular.insert(form.trim().to_lowercase(), lemma.trim().to_lowercase());
        }

        if irregular.is_empty() {
            return Err(Error::asset("lemmas", "irregular-form table is empty"));
        }

        tracing::debug!(count = irregular.len(), "loaded irregular lemma table");
        Ok(Self { irregular })
    }

    /// Reduce a word to its lemma
    ///
    /// Irregular forms are looked up first; otherwise plural suffixes are
    /// stripped with rules. Words that match no rule pass through unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if let Some(lemma) = self.irregular.get(&lower) {
            return lemma.clone();
        }

        // Regular plural reduction. Order matters: longer suffixes first.
        if let Some(stem) = lower.strip_suffix("ies") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if ["sses", "shes", "ches", "xes", "zes"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            if let Some(stem) = lower.strip_suffix("es") {
                return stem.to_string();
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            // Keep words like "ss", "us", "is" endings intact ("class",
            // "bonus", "analysis" is irregular-handled above).
            if stem.len() >= 3
                && !stem.ends_with('s')
                && !stem.ends_with('u')
                && !stem.ends_with('i')
            {
                return stem.to_string();
            }
        }

        lower
    }

    /// Produce a Porter-style stem of a word
    ///
    /// Lighter than a full Porter implementation: plural reduction plus
    /// common derivational and participle suffixes. Diagnostic only.
    pub fn stem(&self, word: &str) -> String {
        let lower = self.lemmatize(word);

        for (suffix, replacement) in [
            ("ational", "ate"),
            ("ization", "ize"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("iveness", "ive"),
            ("tional", "tion"),
            ("alism", "al"),
            ("ment", ""),
            ("ness", ""),
        ] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.len() >= 3 {
                    return format!("{stem}{replacement}");
                }
            }
        }

        for suffix in ["ing", "ed"] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.len() >= 3 && stem.chars().any(is_vowel) {
                    // Undouble a trailing consonant ("running" -> "run").
                    let chars: Vec<char> = stem.chars().collect();
                    let n = chars.len();
                    if n >= 2 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) {
                        return chars[..n - 1].iter().collect();
                    }
                    return stem.to_string();
                }
            }
        }

        lower
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = Lemmatizer::bundled().unwrap();
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("Feet"), "foot");
        assert_eq!(lemmatizer.lemmatize("analyses"), "analysis");
    }

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::bundled().unwrap();
        assert_eq!(lemmatizer.lemmatize("cats"), "cat");
        assert_eq!(lemmatizer.lemmatize("dogs"), "dog");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("stories"), "story");
    }

    #[test]
    fn test_passthrough() {
        let lemmatizer = Lemmatizer::bundled().unwrap();
        assert_eq!(lemmatizer.lemmatize("love"), "love");
        assert_eq!(lemmatizer.lemmatize("weather"), "weather");
        assert_eq!(lemmatizer.lemmatize("class"), "class");
        assert_eq!(lemmatizer.lemmatize("bonus"), "bonus");
    }

    #[test]
    fn test_stemming() {
        let lemmatizer = Lemmatizer::bundled().unwrap();
        assert_eq!(lemmatizer.stem("running"), "run");
        assert_eq!(lemmatizer.stem("jumped"), "jump");
        assert_eq!(lemmatizer.stem("happiness"), "happi");
        assert_eq!(lemmatizer.stem("love"), "love");
    }

    #[test]
    fn test_malformed_table_rejected() {
        assert!(Lemmatizer::from_tsv("children child\n").is_err());
    }
}
