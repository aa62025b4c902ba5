//! # Sentiment Analyzer
//!
//! Orchestrates the valence scorer and the text normalizer into the public
//! analysis operations: single text, per sentence, key indicators, and
//! multi-text comparison.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sentiment::scorer::round4;
use crate::sentiment::{Lexicon, ScoreBundle, ValenceScorer};
use crate::text::{split_sentences, TextNormalizer};

/// Compound score at or above which text classifies positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which text classifies negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Lemmas treated as strong positive indicators by `key_sentiments`
const POSITIVE_INDICATORS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "wonderful",
    "fantastic", "brilliant", "happy", "perfect", "best",
];

/// Lemmas treated as strong negative indicators by `key_sentiments`
const NEGATIVE_INDICATORS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "horrible", "worst", "ugly", "sad",
    "poor", "annoying",
];

/// Sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Compound score >= 0.05
    Positive,
    /// Compound score <= -0.05
    Negative,
    /// Compound score strictly between the thresholds
    Neutral,
}

impl Sentiment {
    /// Classify a compound score against the fixed thresholds
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full analysis of a single text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Classified sentiment
    pub sentiment: Sentiment,
    /// Score bundle, rounded to 4 decimals
    pub scores: ScoreBundle,
    /// Normalized diagnostic rendition of the input
    pub processed_text: String,
    /// Score-bundle component matching the chosen class
    pub confidence: f64,
}

impl AnalysisResult {
    /// The fixed result for empty or whitespace-only input
    fn empty_input() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            scores: ScoreBundle::neutral_only(),
            processed_text: String::new(),
            confidence: 0.0,
        }
    }
}

/// Sentence-level analysis entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceResult {
    /// The sentence as split from the input
    pub sentence: String,
    /// Classified sentiment
    pub sentiment: Sentiment,
    /// Score bundle, rounded to 4 decimals
    pub scores: ScoreBundle,
}

/// Comparison across multiple texts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Per-text results, in input order
    pub results: Vec<AnalysisResult>,
    /// Arithmetic mean of compound scores (0.0 for empty input)
    pub average_compound_score: f64,
    /// Number of texts analyzed
    pub total_texts: usize,
    /// Texts classified positive
    pub positive_count: usize,
    /// Texts classified negative
    pub negative_count: usize,
    /// Texts classified neutral
    pub neutral_count: usize,
}

/// Key sentiment indicators found in a text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeySentiments {
    /// Distinct positive-indicator lemmas, in order of first appearance
    pub positive_indicators: Vec<String>,
    /// Distinct negative-indicator lemmas, in order of first appearance
    pub negative_indicators: Vec<String>,
    /// Count of distinct positive indicators
    pub key_positive_count: usize,
    /// Count of distinct negative indicators
    pub key_negative_count: usize,
}

/// Sentiment analysis service
///
/// Holds the immutable lexicon and dictionaries; all operations are pure
/// `&self` calls, safe to invoke concurrently.
pub struct SentimentAnalyzer {
    scorer: ValenceScorer,
    normalizer: TextNormalizer,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the bundled lexicon and dictionaries
    ///
    /// Asset load failure is fatal here, never per-request.
    pub fn new() -> Result<Self> {
        Ok(Self {
            scorer: ValenceScorer::new(Lexicon::bundled()?),
            normalizer: TextNormalizer::bundled()?,
        })
    }

    /// Create an analyzer with an injected lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        Ok(Self {
            scorer: ValenceScorer::new(lexicon),
            normalizer: TextNormalizer::bundled()?,
        })
    }

    /// Analyze the sentiment of a text
    ///
    /// Empty or whitespace-only input short-circuits to a fixed neutral
    /// result without invoking the scorer. The scorer sees the original
    /// text; the normalizer output only fills `processed_text`.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::empty_input();
        }

        let bundle = self.scorer.score(text);
        let sentiment = Sentiment::from_compound(bundle.compound);
        let confidence = match sentiment {
            Sentiment::Positive => bundle.positive,
            Sentiment::Negative => bundle.negative,
            Sentiment::Neutral => bundle.neutral,
        };
        let normalized = self.normalizer.normalize(text);

        AnalysisResult {
            sentiment,
            scores: bundle.rounded(),
            processed_text: normalized.processed_text,
            confidence: round4(confidence),
        }
    }

    /// Analyze each sentence of a text separately
    ///
    /// Sentences that are empty after trimming are skipped.
    pub fn analyze_sentences(&self, text: &str) -> Vec<SentenceResult> {
        split_sentences(text)
            .into_iter()
            .map(|sentence| {
                let result = self.analyze(&sentence);
                SentenceResult {
                    sentence,
                    sentiment: result.sentiment,
                    scores: result.scores,
                }
            })
            .collect()
    }

    /// Compare sentiment across multiple texts
    ///
    /// Results keep input order; the average compound is 0.0 for an empty
    /// input list.
    pub fn compare_sentiments<S: AsRef<str>>(&self, texts: &[S]) -> ComparisonResult {
        let results: Vec<AnalysisResult> =
            texts.iter().map(|text| self.analyze(text.as_ref())).collect();

        let average_compound_score = if results.is_empty() {
            0.0
        } else {
            let sum: f64 = results.iter().map(|r| r.scores.compound).sum();
            round4(sum / results.len() as f64)
        };

        let count_of = |sentiment: Sentiment| {
            results.iter().filter(|r| r.sentiment == sentiment).count()
        };

        ComparisonResult {
            total_texts: results.len(),
            average_compound_score,
            positive_count: count_of(Sentiment::Positive),
            negative_count: count_of(Sentiment::Negative),
            neutral_count: count_of(Sentiment::Neutral),
            results,
        }
    }

    /// Extract key sentiment indicator lemmas from a text
    ///
    /// Diagnostic aid over the normalized lemmas; independent of the
    /// valence scoring algorithm.
    pub fn key_sentiments(&self, text: &str) -> KeySentiments {
        let normalized = self.normalizer.normalize(text);

        let mut positive_indicators: Vec<String> = Vec::new();
        let mut negative_indicators: Vec<String> = Vec::new();

        for lemma in &normalized.lemmas {
            if POSITIVE_INDICATORS.contains(&lemma.as_str()) {
                if !positive_indicators.contains(lemma) {
                    positive_indicators.push(lemma.clone());
                }
            } else if NEGATIVE_INDICATORS.contains(&lemma.as_str())
                && !negative_indicators.contains(lemma)
            {
                negative_indicators.push(lemma.clone());
            }
        }

        KeySentiments {
            key_positive_count: positive_indicators.len(),
            key_negative_count: negative_indicators.len(),
            positive_indicators,
            negative_indicators,
        }
    }
}
