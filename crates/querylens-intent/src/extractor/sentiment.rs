use super::keywords::hits;
use crate::config::Vocabulary;
use querylens_core::Sentiment;

/// Classify the tone of a normalized query.
///
/// Problem terms win ties against learning terms, so "why does X fail"
/// counts as a problem report rather than a question about X.
pub fn detect(normalized: &str, vocabulary: &Vocabulary) -> Sentiment {
    let problem = hits(normalized, &vocabulary.problem).len();
    let learning = hits(normalized, &vocabulary.learning).len();

    if problem > 0 && problem >= learning {
        Sentiment::ProblemFocused
    } else if learning > 0 {
        Sentiment::LearningFocused
    } else {
        Sentiment::Neutral
    }
}
