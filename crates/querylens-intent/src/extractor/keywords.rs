use crate::config::Vocabulary;
use querylens_core::KeywordHits;

/// Collect vocabulary hits from the normalized query, in vocabulary order.
pub fn collect(normalized: &str, vocabulary: &Vocabulary) -> KeywordHits {
    KeywordHits::new(
        hits(normalized, &vocabulary.debug),
        hits(normalized, &vocabulary.flow),
        hits(normalized, &vocabulary.architecture),
        hits(normalized, &vocabulary.performance),
    )
}

/// Vocabulary words that occur anywhere in the text.
pub fn hits(normalized: &str, words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|word| normalized.contains(word.as_str()))
        .cloned()
        .collect()
}
