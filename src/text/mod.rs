//! # Text Module
//!
//! Linguistic preprocessing: normalization, tokenization, stopword
//! filtering, lemmatization and sentence splitting.

mod lemmatizer;
mod normalizer;
mod sentences;
mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use normalizer::{Normalized, TextNormalizer};
pub use sentences::split_sentences;
pub use stopwords::Stopwords;
