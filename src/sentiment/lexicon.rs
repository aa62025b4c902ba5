//! # Valence Lexicon
//!
//! Word-to-valence mapping plus negation and intensity modifier tables.
//! Valences live in a bundled TSV asset, loaded once at construction and
//! immutable afterwards.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Bundled general-English valence lexicon
const LEXICON_DATA: &str = include_str!("../../data/lexicon.tsv");

/// Supported valence range
const VALENCE_MIN: f64 = -4.0;
const VALENCE_MAX: f64 = 4.0;

/// Sentiment lexicon
///
/// Contains word-valence mappings, negation words, and intensity
/// multipliers. Read-only after construction, safe to share across threads.
pub struct Lexicon {
    /// Word to valence mapping
    words: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// Intensity multipliers (> 1 intensifies, < 1 diminishes)
    intensifiers: HashMap<String, f64>,
}

impl Lexicon {
    /// Load the bundled valence lexicon
    pub fn bundled() -> Result<Self> {
        let lexicon = Self::from_tsv(LEXICON_DATA)?;
        tracing::info!(entries = lexicon.len(), "loaded bundled valence lexicon");
        Ok(lexicon)
    }

    /// Parse a lexicon from `word<TAB>valence` lines
    ///
    /// Negation and intensifier tables are fixed; only valences come from
    /// the data asset. Malformed lines and out-of-range valences are fatal.
    pub fn from_tsv(data: &str) -> Result<Self> {
        let mut words = HashMap::new();

        for (line_no, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, valence) = line.split_once('\t').ok_or_else(|| {
                Error::asset(
                    "lexicon",
                    format!("line {}: expected word<TAB>valence", line_no + 1),
                )
            })?;
            let valence: f64 = valence.trim().parse().map_err(|_| {
                Error::asset(
                    "lexicon",
                    format!("line {}: '{}' is not a number", line_no + 1, valence.trim()),
                )
            })?;
            if !(VALENCE_MIN..=VALENCE_MAX).contains(&valence) {
                return Err(Error::ValenceOutOfRange {
                    word: word.to_string(),
                    valence,
                });
            }
            words.insert(word.trim().to_lowercase(), valence);
        }

        if words.is_empty() {
            return Err(Error::asset("lexicon", "no entries"));
        }

        Ok(Self {
            words,
            negations: default_negations(),
            intensifiers: default_intensifiers(),
        })
    }

    /// Build a lexicon from explicit entries, for tests and callers with
    /// their own word lists
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut words = HashMap::new();
        for (word, valence) in entries {
            let word = word.into();
            if !(VALENCE_MIN..=VALENCE_MAX).contains(&valence) {
                return Err(Error::ValenceOutOfRange { word, valence });
            }
            words.insert(word.to_lowercase(), valence);
        }
        if words.is_empty() {
            return Err(Error::asset("lexicon", "no entries"));
        }
        Ok(Self {
            words,
            negations: default_negations(),
            intensifiers: default_intensifiers(),
        })
    }

    /// Get the valence of a word (case-insensitive)
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == &word.to_lowercase())
    }

    /// Get the intensity multiplier for a word, if it is a modifier
    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Number of valence entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn default_negations() -> Vec<String> {
    [
        "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
        "none", "cannot", "cant", "can't", "don't", "dont", "doesn't",
        "doesnt", "didn't", "didnt", "won't", "wont", "wouldn't", "wouldnt",
        "shouldn't", "shouldnt", "couldn't", "couldnt", "isn't", "isnt",
        "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "ain't",
        "aint", "hardly", "barely", "scarcely", "rarely", "seldom", "without",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_intensifiers() -> HashMap<String, f64> {
    [
        ("very", 1.5),
        ("extremely", 2.0),
        ("absolutely", 1.8),
        ("completely", 1.7),
        ("totally", 1.7),
        ("utterly", 1.8),
        ("really", 1.4),
        ("so", 1.4),
        ("incredibly", 1.8),
        ("highly", 1.5),
        ("remarkably", 1.5),
        ("particularly", 1.3),
        ("truly", 1.4),
        ("deeply", 1.5),
        ("quite", 1.2),
        ("slightly", 0.5),
        ("somewhat", 0.7),
        ("marginally", 0.5),
        ("kinda", 0.7),
        ("fairly", 0.8),
        ("mildly", 0.6),
    ]
    .into_iter()
    .map(|(word, mult)| (word.to_string(), mult))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_loads() {
        let lexicon = Lexicon::bundled().unwrap();
        assert!(lexicon.len() > 200);
    }

    #[test]
    fn test_valence_lookup() {
        let lexicon = Lexicon::bundled().unwrap();
        assert!(lexicon.valence("love").unwrap() > 2.0);
        assert!(lexicon.valence("LOVE").unwrap() > 2.0);
        assert!(lexicon.valence("terrible").unwrap() < -2.0);
        assert!(lexicon.valence("zzzz").is_none());
    }

    #[test]
    fn test_negations() {
        let lexicon = Lexicon::bundled().unwrap();
        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation("Never"));
        assert!(lexicon.is_negation("don't"));
        assert!(!lexicon.is_negation("love"));
    }

    #[test]
    fn test_intensifiers() {
        let lexicon = Lexicon::bundled().unwrap();
        assert!(lexicon.intensity("very").unwrap() > 1.0);
        assert!(lexicon.intensity("extremely").unwrap() > lexicon.intensity("very").unwrap());
        assert!(lexicon.intensity("slightly").unwrap() < 1.0);
        assert!(lexicon.intensity("weather").is_none());
    }

    #[test]
    fn test_malformed_line_rejected() {
        assert!(Lexicon::from_tsv("love 3.2\n").is_err());
        assert!(Lexicon::from_tsv("love\tgreat\n").is_err());
    }

    #[test]
    fn test_out_of_range_valence_rejected() {
        assert!(Lexicon::from_tsv("love\t9.5\n").is_err());
        assert!(Lexicon::from_entries([("love", 9.5)]).is_err());
    }

    #[test]
    fn test_custom_entries() {
        let lexicon = Lexicon::from_entries([("flubber", 2.0), ("grok", -1.0)]).unwrap();
        assert_eq!(lexicon.valence("flubber"), Some(2.0));
        assert_eq!(lexicon.valence("grok"), Some(-1.0));
    }
}
