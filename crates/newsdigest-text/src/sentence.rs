//! Sentence segmentation on raw text.

/// Split text into sentences at `.`/`!`/`?` followed by ASCII whitespace.
///
/// Runs on raw, unnormalized text so every sentence keeps its original
/// casing and punctuation; the non-empty remainder after the last
/// terminator counts as a sentence too. Abbreviations like "Dr." split
/// early, which the scorer tolerates.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;
    for i in 0..bytes.len() {
        let terminator = matches!(bytes[i], b'.' | b'!' | b'?');
        if terminator && bytes.get(i + 1).is_some_and(|b| b.is_ascii_whitespace()) {
            push_trimmed(&mut sentences, &text[start..=i]);
            start = i + 1;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, raw: &'a str) {
    let s = raw.trim();
    if !s.is_empty() {
        out.push(s);
    }
}
