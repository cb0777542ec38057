use querylens_core::{ComplexityAssessment, ComplexityLevel, clamp_unit};

/// Word count at which the word component saturates
const WORD_SCALE: f64 = 50.0;
/// Sentence count at which the sentence component saturates
const SENTENCE_SCALE: f64 = 5.0;
/// Entity count at which the entity component saturates
const ENTITY_SCALE: f64 = 10.0;

const WORD_WEIGHT: f64 = 0.4;
const SENTENCE_WEIGHT: f64 = 0.3;
const ENTITY_WEIGHT: f64 = 0.3;

/// Assess query complexity from its size and the number of entities it names.
pub fn assess(query: &str, entity_count: usize) -> ComplexityAssessment {
    let word_count = query.split_whitespace().count();
    let sentence_count = count_sentences(query);
    let complexity_score = score(word_count, sentence_count, entity_count);

    ComplexityAssessment {
        word_count,
        sentence_count,
        entity_count,
        complexity_score,
        complexity_level: ComplexityLevel::from_score(complexity_score),
    }
}

/// Weighted complexity score in `[0, 1]`.
pub fn score(word_count: usize, sentence_count: usize, entity_count: usize) -> f64 {
    let words = word_count as f64 / WORD_SCALE;
    let sentences = sentence_count as f64 / SENTENCE_SCALE;
    let entities = entity_count as f64 / ENTITY_SCALE;
    clamp_unit(words.mul_add(
        WORD_WEIGHT,
        sentences.mul_add(SENTENCE_WEIGHT, entities * ENTITY_WEIGHT),
    ))
}

/// Runs of terminators produce empty segments, which are not sentences.
fn count_sentences(query: &str) -> usize {
    query
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}
