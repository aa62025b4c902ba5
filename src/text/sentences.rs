//! # Sentence Splitting
//!
//! Boundary detection on `.`, `!` and `?` with awareness of common
//! English abbreviations, so "Dr. Smith" does not split mid-name.

/// Abbreviations whose trailing period is not a sentence boundary
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc",
    "ltd", "co", "corp", "dept", "est", "fig", "gen", "gov", "approx",
    "e.g", "i.e", "a.m", "p.m", "u.s", "u.k", "no",
];

/// Split text into sentences
///
/// A run of `.!?` ends a sentence unless the preceding word is a known
/// abbreviation or a single letter (initials). Sentences are trimmed and
/// empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        current.push(c);

        if matches!(c, '.' | '!' | '?') {
            // Absorb the rest of the terminator run (e.g. "?!", "...").
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                current.push(chars[i]);
            }

            let boundary = c != '.' || !ends_with_abbreviation(&current);
            if boundary {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                current.clear();
            }
        }

        i += 1;
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Check whether the text ends in `<abbreviation>.`
fn ends_with_abbreviation(text: &str) -> bool {
    let trimmed = text.trim_end_matches('.');
    let last_word = trimmed
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("")
        .to_lowercase();

    if last_word.is_empty() {
        return false;
    }
    // Single letters read as initials ("J. Smith").
    if last_word.chars().count() == 1 && last_word.chars().all(|c| c.is_alphabetic()) {
        return true;
    }
    ABBREVIATIONS.contains(&last_word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("I love this. It works well! Does it?");
        assert_eq!(
            sentences,
            vec!["I love this.", "It works well!", "Does it?"]
        );
    }

    #[test]
    fn test_abbreviation_not_split() {
        let sentences = split_sentences("Dr. Smith arrived. He was late.");
        assert_eq!(sentences, vec!["Dr. Smith arrived.", "He was late."]);
    }

    #[test]
    fn test_initials_not_split() {
        let sentences = split_sentences("J. R. Tolkien wrote it. It is long.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_terminator_runs() {
        let sentences = split_sentences("Amazing!!! Truly... What next?!");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Amazing!!!");
    }

    #[test]
    fn test_no_terminator() {
        let sentences = split_sentences("no punctuation here");
        assert_eq!(sentences, vec!["no punctuation here"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
