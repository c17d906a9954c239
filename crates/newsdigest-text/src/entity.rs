//! Heuristic named-entity candidates.

use std::collections::HashSet;

use crate::sentence::split_sentences;

/// Distinct candidate entity surface forms in `text`.
///
/// A whitespace-delimited token qualifies when its first character is
/// uppercase and it is longer than two characters. Surface forms are kept
/// verbatim, so "Reuters," and "Reuters" are distinct candidates and
/// acronyms like "AI" never qualify. Sentence-initial capitalized common
/// words are accepted false positives; the importance scorer only boosts
/// candidates that survive normalization anyway.
pub fn extract_entities(text: &str) -> HashSet<String> {
    let mut entities = HashSet::new();
    for sentence in split_sentences(text) {
        for word in sentence.split_whitespace() {
            let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
            if capitalized && word.chars().count() > 2 {
                entities.insert(word.to_string());
            }
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_long_words_qualify() {
        let entities = extract_entities("Apple unveiled a headset in Cupertino yesterday.");
        assert!(entities.contains("Apple"));
        assert!(entities.contains("Cupertino"));
        assert!(!entities.contains("unveiled"));
        assert!(!entities.contains("headset"));
    }

    #[test]
    fn test_short_acronyms_are_skipped() {
        let entities = extract_entities("AI helps doctors. AI is new.");
        assert!(!entities.contains("AI"));
    }

    #[test]
    fn test_sentence_initial_words_are_kept() {
        let entities = extract_entities("The ministry declined to comment.");
        assert!(entities.contains("The"));
    }

    #[test]
    fn test_surface_forms_keep_punctuation() {
        let entities = extract_entities("Shares of Tesla, maker of cars, fell.");
        assert!(entities.contains("Tesla,"));
        assert!(!entities.contains("Tesla"));
    }

    #[test]
    fn test_empty_text_has_no_entities() {
        assert!(extract_entities("").is_empty());
    }
}
