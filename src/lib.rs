//! # sentilex
//!
//! Lexicon-and-rule-based sentiment analysis with linguistic preprocessing.
//!
//! Classifies free-form text into positive/negative/neutral sentiment by
//! summing word valences from an immutable lexicon, adjusted by local
//! heuristics (negation, intensifiers, ALL-CAPS emphasis, exclamation
//! marks). A separate normalization pipeline produces a cleaned,
//! lemmatized rendition of the input for diagnostics; the scorer always
//! works on the original text, because case and punctuation carry signal
//! that normalization strips.
//!
//! ## Modules
//!
//! - `sentiment` - Valence lexicon, scorer, and the analysis service
//! - `text` - Normalization, tokenization, lemmatization, sentence splitting
//! - `error` - Crate error type
//!
//! ## Example Usage
//!
//! ```
//! use sentilex::{Sentiment, SentimentAnalyzer};
//!
//! let analyzer = SentimentAnalyzer::new().expect("bundled assets load");
//!
//! let result = analyzer.analyze("I absolutely love this!");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert!(result.scores.compound > 0.5);
//!
//! let comparison = analyzer.compare_sentiments(&["I love this!", "Terrible!"]);
//! assert_eq!(comparison.total_texts, 2);
//! ```
//!
//! All operations are synchronous and pure: after construction the
//! analyzer holds only immutable state, so a single instance may be shared
//! across threads without locking.

pub mod error;
pub mod sentiment;
pub mod text;

// Re-exports for convenience
pub use error::{Error, Result};
pub use sentiment::{
    AnalysisResult, ComparisonResult, KeySentiments, Lexicon, ScoreBundle, SentenceResult,
    Sentiment, SentimentAnalyzer, ValenceScorer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use text::{split_sentences, Lemmatizer, Normalized, Stopwords, TextNormalizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
