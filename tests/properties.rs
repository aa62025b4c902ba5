//! Whole-crate behavior tests: score invariants, classification
//! boundaries, and end-to-end scenarios.

use approx::assert_relative_eq;
use sentilex::{ScoreBundle, Sentiment, SentimentAnalyzer, ValenceScorer};

fn analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::new().expect("bundled assets load")
}

const SAMPLE_TEXTS: &[&str] = &[
    "",
    "   ",
    "I absolutely love this!",
    "This is terrible and useless!",
    "The weather is nice today.",
    "not good, not bad",
    "EXTREMELY disappointing service!!",
    "the chair is next to the table",
    "caf\u{e9} \u{1F600} ok \u{FFFD}",
    "Dr. Smith said it was excellent. Mr. Jones disagreed strongly.",
    "I don't hate it, but I don't love it either.",
];

fn assert_well_formed(bundle: &ScoreBundle) {
    let sum = bundle.positive + bundle.negative + bundle.neutral;
    assert!(
        (sum - 1.0).abs() < 0.001,
        "proportions sum to {sum}, expected 1.0"
    );
    assert!(
        (-1.0..=1.0).contains(&bundle.compound),
        "compound {} out of range",
        bundle.compound
    );
    for value in [bundle.positive, bundle.negative, bundle.neutral] {
        assert!(value >= 0.0);
    }
}

#[test]
fn proportions_sum_to_one_for_all_inputs() {
    let a = analyzer();
    for text in SAMPLE_TEXTS {
        assert_well_formed(&a.analyze(text).scores);
    }
}

#[test]
fn compound_stays_in_range_for_all_inputs() {
    let a = analyzer();
    for text in SAMPLE_TEXTS {
        let compound = a.analyze(text).scores.compound;
        assert!((-1.0..=1.0).contains(&compound), "{text}: {compound}");
    }
}

#[test]
fn empty_and_whitespace_inputs_are_fixed_neutral() {
    let a = analyzer();
    for text in ["", "   "] {
        let result = a.analyze(text);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.scores.positive, 0.0);
        assert_eq!(result.scores.negative, 0.0);
        assert_eq!(result.scores.neutral, 1.0);
        assert_eq!(result.scores.compound, 0.0);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.processed_text, "");
    }
}

#[test]
fn analyze_is_idempotent() {
    let a = analyzer();
    for text in SAMPLE_TEXTS {
        let first = a.analyze(text);
        let second = a.analyze(text);
        assert_eq!(first.sentiment, second.sentiment);
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.processed_text, second.processed_text);
        assert_eq!(first.confidence, second.confidence);
    }
}

#[test]
fn threshold_boundaries_are_inclusive() {
    assert_eq!(Sentiment::from_compound(0.05), Sentiment::Positive);
    assert_eq!(Sentiment::from_compound(-0.05), Sentiment::Negative);
    assert_eq!(Sentiment::from_compound(0.0499), Sentiment::Neutral);
    assert_eq!(Sentiment::from_compound(-0.0499), Sentiment::Neutral);
}

#[test]
fn empty_comparison_has_zero_average() {
    let comparison = analyzer().compare_sentiments::<&str>(&[]);
    assert_eq!(comparison.average_compound_score, 0.0);
    assert_eq!(comparison.total_texts, 0);
    assert_eq!(comparison.positive_count, 0);
    assert_eq!(comparison.negative_count, 0);
    assert_eq!(comparison.neutral_count, 0);
}

#[test]
fn scenario_strong_positive() {
    let result = analyzer().analyze("I absolutely love this!");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!(result.scores.compound > 0.5, "{}", result.scores.compound);
}

#[test]
fn scenario_strong_negative() {
    let result = analyzer().analyze("This is terrible and useless!");
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert!(result.scores.compound < -0.4, "{}", result.scores.compound);
}

#[test]
fn scenario_mild_positive() {
    let result = analyzer().analyze("The weather is nice today.");
    assert!(matches!(
        result.sentiment,
        Sentiment::Positive | Sentiment::Neutral
    ));
    assert!(result.scores.compound > -0.05);
    assert!(result.scores.compound < 0.6);
}

#[test]
fn scenario_comparison_counts() {
    let comparison = analyzer().compare_sentiments(&["I love this!", "Terrible!", "Nice!"]);
    assert_eq!(comparison.results.len(), 3);
    assert_eq!(
        comparison.positive_count + comparison.negative_count + comparison.neutral_count,
        3
    );
    // Average is the arithmetic mean of the per-text compounds.
    let mean: f64 = comparison
        .results
        .iter()
        .map(|r| r.scores.compound)
        .sum::<f64>()
        / 3.0;
    assert_relative_eq!(comparison.average_compound_score, mean, epsilon = 1e-4);
}

#[test]
fn scorer_and_normalizer_stay_independent() {
    // The scorer must see raw text: shouting and punctuation change the
    // score even though the normalized diagnostic output is identical.
    let a = analyzer();
    let quiet = a.analyze("this is really good");
    let loud = a.analyze("this is REALLY good!");
    assert_eq!(quiet.processed_text, loud.processed_text);
    assert!(loud.scores.compound > quiet.scores.compound);
}

#[test]
fn sentence_analysis_tracks_per_sentence_polarity() {
    let results = analyzer()
        .analyze_sentences("The food was wonderful. The service was awful. We paid and left.");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].sentiment, Sentiment::Positive);
    assert_eq!(results[1].sentiment, Sentiment::Negative);
    assert_eq!(results[2].sentiment, Sentiment::Neutral);
    for result in &results {
        assert_well_formed(&result.scores);
    }
}

#[test]
fn results_serialize_to_json() {
    let result = analyzer().analyze("I love this!");
    let json = serde_json::to_value(&result).expect("serializes");
    assert_eq!(json["sentiment"], "positive");
    assert!(json["scores"]["compound"].as_f64().unwrap() > 0.0);
    assert!(json["confidence"].as_f64().is_some());
}

#[test]
fn degraded_input_never_panics() {
    let a = analyzer();
    let scorer = ValenceScorer::new(sentilex::Lexicon::bundled().unwrap());
    for text in [
        "\u{0000}\u{FFFF}",
        "!!!???...",
        "𝕨𝕖𝕚𝕣𝕕 𝕗𝕠𝕟𝕥𝕤",
        "a̸̡̘͚͝m̶̺̿b̵̼̊i̷͎͝ḙ̸̊n̸̤̏t̵̞́ noise",
    ] {
        assert_well_formed(&a.analyze(text).scores);
        assert_well_formed(&scorer.score(text));
    }
}
