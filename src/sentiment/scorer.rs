//! # Valence Scorer
//!
//! Lexicon-weighted heuristic polarity scoring. Operates on the original,
//! un-stripped input: capitalization and punctuation carry sentiment signal
//! that the display-oriented normalizer destroys, so the two pipelines stay
//! independent.

use serde::{Deserialize, Serialize};

use crate::sentiment::Lexicon;

/// Tokens before a match inspected for negations and ALL-CAPS emphasis
const NEGATION_WINDOW: usize = 3;

/// Magnitude dampening applied when a match is negated
const NEGATION_DAMP: f64 = 0.74;

/// Tokens before a match inspected for intensity modifiers
const INTENSITY_WINDOW: usize = 2;

/// Per-step decay of an intensity modifier's effect with distance
const INTENSITY_DECAY: f64 = 0.95;

/// Additive magnitude boost from a preceding ALL-CAPS word
const CAPS_BOOST: f64 = 0.733;

/// Additive magnitude boost per trailing exclamation mark
const EXCLAIM_BOOST: f64 = 0.292;

/// Exclamation marks counted beyond this are ignored
const MAX_EXCLAIMS: usize = 4;

/// Normalization constant for the compound squashing function
const ALPHA: f64 = 15.0;

/// Normalized sentiment scores for a span of text
///
/// `positive`, `negative` and `neutral` are proportions summing to 1.0;
/// `compound` is the bounded summary polarity in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    /// Proportion of positive signal
    pub positive: f64,
    /// Proportion of negative signal
    pub negative: f64,
    /// Proportion of neutral signal
    pub neutral: f64,
    /// Bounded summary polarity
    pub compound: f64,
}

impl ScoreBundle {
    /// The fixed bundle for empty or signal-free text
    pub fn neutral_only() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    }

    /// Round every component to 4 decimal places
    ///
    /// Applied only at the API boundary; internal computation keeps full
    /// precision.
    pub fn rounded(&self) -> Self {
        Self {
            positive: round4(self.positive),
            negative: round4(self.negative),
            neutral: round4(self.neutral),
            compound: round4(self.compound),
        }
    }
}

/// Round a float to 4 decimal places
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// A raw token with the punctuation context scoring needs
#[derive(Debug, Clone)]
struct RawToken {
    /// Lowercased token with edge punctuation trimmed (apostrophes kept)
    cleaned: String,
    /// Trailing `!` count on the original token
    exclaims: usize,
    /// Whether the original is an ALL-CAPS word of two or more letters
    all_caps: bool,
    /// Whether the token contains any alphanumeric content
    is_word: bool,
}

impl RawToken {
    fn from_original(original: &str) -> Self {
        let exclaims = original.chars().rev().take_while(|&c| c == '!').count();
        let cleaned: String = original
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
            .trim_matches('\'')
            .to_lowercase();
        let alphabetic: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
        let all_caps = alphabetic.len() >= 2 && alphabetic.iter().all(|c| c.is_uppercase());
        let is_word = original.chars().any(|c| c.is_alphanumeric());

        Self {
            cleaned,
            exclaims,
            all_caps,
            is_word,
        }
    }
}

/// Lexicon-and-rule polarity scorer
///
/// Pure and deterministic: the score is a function of the input text and
/// the immutable lexicon alone.
pub struct ValenceScorer {
    lexicon: Lexicon,
}

impl ValenceScorer {
    /// Create a scorer over the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Access the underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a span of raw text
    ///
    /// Feed the ORIGINAL text here, not the normalizer output.
    pub fn score(&self, raw: &str) -> ScoreBundle {
        let tokens: Vec<RawToken> = raw.split_whitespace().map(RawToken::from_original).collect();
        if tokens.is_empty() {
            return ScoreBundle::neutral_only();
        }

        // ALL-CAPS emphasis only means something when the text itself is
        // not uniformly shouted.
        let caps_words = tokens.iter().filter(|t| t.all_caps).count();
        let alpha_words = tokens
            .iter()
            .filter(|t| t.is_word && t.cleaned.chars().any(|c| c.is_alphabetic()))
            .count();
        let uniformly_caps = alpha_words > 0 && caps_words == alpha_words;

        let mut raw_total = 0.0;
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            if !token.is_word {
                continue;
            }
            let Some(valence) = self.lexicon.valence(&token.cleaned) else {
                neu_count += 1.0;
                continue;
            };
            if valence == 0.0 {
                neu_count += 1.0;
                continue;
            }

            let modified = self.apply_modifiers(&tokens, i, valence, uniformly_caps);
            raw_total += modified;
            if modified > 0.0 {
                pos_sum += modified + 1.0;
            } else if modified < 0.0 {
                neg_sum += modified.abs() + 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        let compound = squash(raw_total);
        let total = pos_sum + neg_sum + neu_count;
        if total == 0.0 {
            return ScoreBundle::neutral_only();
        }

        ScoreBundle {
            positive: pos_sum / total,
            negative: neg_sum / total,
            neutral: neu_count / total,
            compound,
        }
    }

    /// Apply local context modifiers to a matched word's base valence
    fn apply_modifiers(
        &self,
        tokens: &[RawToken],
        index: usize,
        valence: f64,
        uniformly_caps: bool,
    ) -> f64 {
        let mut modified = valence;

        // Intensity modifiers scale magnitude, weaker with distance.
        for distance in 1..=INTENSITY_WINDOW {
            let Some(j) = index.checked_sub(distance) else { break };
            if let Some(mult) = self.lexicon.intensity(&tokens[j].cleaned) {
                let effective = 1.0 + (mult - 1.0) * INTENSITY_DECAY.powi(distance as i32 - 1);
                modified *= effective;
            }
        }

        // An odd number of negations in the window flips the sign and
        // dampens the magnitude.
        let window_start = index.saturating_sub(NEGATION_WINDOW);
        let negations = tokens[window_start..index]
            .iter()
            .filter(|t| self.lexicon.is_negation(&t.cleaned))
            .count();
        if negations % 2 == 1 {
            modified = -modified * NEGATION_DAMP;
        }

        // A preceding ALL-CAPS word adds emphasis, sign-matched.
        if !uniformly_caps
            && tokens[window_start..index].iter().any(|t| t.all_caps)
        {
            modified += CAPS_BOOST * modified.signum();
        }

        // Trailing exclamation marks on the matched token, capped.
        let exclaims = tokens[index].exclaims.min(MAX_EXCLAIMS);
        if exclaims > 0 {
            modified += EXCLAIM_BOOST * exclaims as f64 * modified.signum();
        }

        modified
    }
}

/// Squash an unbounded raw valence total into [-1, 1]
///
/// `raw / sqrt(raw^2 + ALPHA)` saturates smoothly instead of clipping, and
/// maps zero-signal text to exactly 0.
fn squash(raw: f64) -> f64 {
    (raw / (raw * raw + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
