//! Extractive summarization front end.

use newsdigest_core::config::DEFAULT_SUMMARY_LENGTH;

use crate::entity::extract_entities;
use crate::importance::term_weights;
use crate::normalize::scoring_tokens;
use crate::rank::{score_sentences, select_top};
use crate::sentence::split_sentences;
use crate::stopwords::StopWords;

/// Inputs shorter than this many whitespace-delimited words pass through
/// unchanged; there is nothing to rank.
const MIN_WORDS: usize = 10;

/// Unsupervised extractive summarizer for a single document.
///
/// Scores sentences by term importance, entity mentions, and position, then
/// emits the best ones in original document order. Never fails: trivially
/// short input is returned as-is.
#[derive(Debug, Clone)]
pub struct Summarizer {
    stop_words: StopWords,
    max_length: usize,
}

impl Summarizer {
    /// English summarizer with the default summary length.
    pub fn new() -> Self {
        Self::with_config(StopWords::english(), DEFAULT_SUMMARY_LENGTH)
    }

    /// Summarizer with an explicit stop-word set and default length.
    pub fn with_config(stop_words: StopWords, max_length: usize) -> Self {
        Self {
            stop_words,
            max_length,
        }
    }

    /// Summary at the configured default length.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_to(text, self.max_length)
    }

    /// Extractive summary of up to `length` sentences, one per line, in
    /// document order.
    pub fn summarize_to(&self, text: &str, length: usize) -> String {
        if text.split_whitespace().count() < MIN_WORDS {
            return text.to_string();
        }

        let sentences = split_sentences(text);
        let tokens = scoring_tokens(text, &self.stop_words);
        let entities = extract_entities(text);
        let weights = term_weights(&tokens, &entities, &self.stop_words);
        let scores = score_sentences(&sentences, &weights, &entities);

        select_top(&scores, length.min(sentences.len()))
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AI_TEXT: &str = "AI helps doctors. AI is new. Doctors use AI daily. \
                           The weather was sunny.";

    #[test]
    fn test_short_input_passes_through_at_any_length() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize("Too short to bother."), "Too short to bother.");
        assert_eq!(summarizer.summarize_to("Too short to bother.", 1), "Too short to bother.");
        assert_eq!(summarizer.summarize_to("Too short to bother.", 100), "Too short to bother.");
        assert_eq!(summarizer.summarize(""), "");
    }

    #[test]
    fn test_two_sentence_summary_of_ai_text() {
        // Hand-checked scores: 6.0, 1.0, 5.625, 1.25. The top two are the
        // first and third sentences, reassembled in document order.
        let summarizer = Summarizer::new();
        let summary = summarizer.summarize_to(AI_TEXT, 2);
        assert_eq!(summary, "AI helps doctors.\nDoctors use AI daily.");
    }

    #[test]
    fn test_default_length_takes_three_sentences() {
        let summarizer = Summarizer::new();
        let summary = summarizer.summarize(AI_TEXT);
        assert_eq!(
            summary,
            "AI helps doctors.\nDoctors use AI daily.\nThe weather was sunny."
        );
    }

    #[test]
    fn test_requested_length_clamps_to_sentence_count() {
        let summarizer = Summarizer::new();
        let summary = summarizer.summarize_to(AI_TEXT, 100);
        assert_eq!(summary.lines().count(), 4);
    }

    #[test]
    fn test_summary_keeps_document_order() {
        // The last sentence dominates on weight but must still appear after
        // the opening sentence in the output.
        let text = "The committee met on Monday to debate. Nothing was resolved then. \
                    Members argued for hours about procedure. Budget budget budget \
                    budget cuts dominated every single exchange.";
        let summarizer = Summarizer::new();
        let summary = summarizer.summarize_to(text, 2);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        let first_pos = text.find(lines[0]).unwrap();
        let second_pos = text.find(lines[1]).unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_stop_word_heavy_text_still_summarizes() {
        // All-zero sentence scores still produce output; selection falls
        // back to the earliest sentences.
        let text = "It was what it was. They were there too. He is as he is. \
                    She was with them then.";
        let summarizer = Summarizer::new();
        let summary = summarizer.summarize_to(text, 1);
        assert_eq!(summary, "It was what it was.");
    }
}
