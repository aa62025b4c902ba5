//! Error types for the sentilex library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A bundled data asset (lexicon, stopwords, lemmas) failed to parse
    #[error("failed to load {asset} asset: {reason}")]
    AssetLoad {
        asset: &'static str,
        reason: String,
    },

    /// A lexicon entry carries a valence outside the supported range
    #[error("valence {valence} for '{word}' is outside [-4.0, 4.0]")]
    ValenceOutOfRange { word: String, valence: f64 },
}

impl Error {
    /// Shorthand for an asset parse failure
    pub(crate) fn asset(asset: &'static str, reason: impl Into<String>) -> Self {
        Error::AssetLoad {
            asset,
            reason: reason.into(),
        }
    }
}
