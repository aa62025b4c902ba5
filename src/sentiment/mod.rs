//! # Sentiment Module
//!
//! Valence lexicon, rule-based scorer, and the analysis service.

mod analyzer;
mod lexicon;
mod scorer;

pub use analyzer::{
    AnalysisResult, ComparisonResult, KeySentiments, SentenceResult, Sentiment,
    SentimentAnalyzer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use lexicon::Lexicon;
pub use scorer::{ScoreBundle, ValenceScorer};
