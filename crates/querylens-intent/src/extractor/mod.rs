//! Feature extraction from raw developer queries.
//!
//! Extraction runs five independent stages over a single query: entity
//! matching on the raw text, question-pattern detection, complexity
//! assessment, keyword hits and sentiment on the normalized text. The stages
//! are combined into an [`AnalysisResult`] together with metrics describing
//! how much signal the query carried.

/// Size and entity based complexity
mod complexity;
/// Class, method and package matchers
mod entities;
/// Category vocabulary hits
mod keywords;
/// Interrogative templates
mod patterns;
/// Problem versus learning tone
mod sentiment;

use crate::config::Vocabulary;
use querylens_core::{
    AnalysisMetrics, AnalysisResult, AuxContext, IntentError, QuestionPatterns, Result, clamp_unit,
};
use tracing::debug;

/// Length (in characters) at which the length bonus saturates
const LENGTH_SCALE: f64 = 200.0;
/// Entity count at which the entity bonus saturates
const ENTITY_SCALE: f64 = 10.0;
const LENGTH_CAP: f64 = 0.3;
const ENTITY_CAP: f64 = 0.3;
const PATTERN_BONUS: f64 = 0.2;
const ENTITY_PRESENCE_BONUS: f64 = 0.2;

/// Turns a raw query into a structured [`AnalysisResult`].
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    vocabulary: Vocabulary,
}

impl FeatureExtractor {
    /// Create an extractor using the given keyword vocabularies.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Vocabularies in use.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Analyze a query.
    ///
    /// The auxiliary context is accepted for the caller's bookkeeping only;
    /// its values never influence the analysis.
    ///
    /// # Errors
    /// Returns [`IntentError::Validation`] if the query is empty or blank.
    pub fn analyze(&self, query: &str, context: Option<&AuxContext>) -> Result<AnalysisResult> {
        if query.trim().is_empty() {
            return Err(IntentError::Validation(
                "query must not be empty or blank".to_owned(),
            ));
        }

        let normalized_query = query.trim().to_lowercase();

        let entities = entities::extract(query);
        let question_patterns = patterns::detect(&normalized_query);
        let complexity = complexity::assess(query, entities.counts.total);
        let keywords = keywords::collect(&normalized_query, &self.vocabulary);
        let sentiment = sentiment::detect(&normalized_query, &self.vocabulary);
        let metrics = Self::metrics(
            query,
            entities.counts.total,
            complexity.word_count,
            &question_patterns,
        );

        debug!(
            entities = entities.counts.total,
            pattern = %question_patterns.primary_pattern,
            keywords = keywords.total_keywords,
            ?sentiment,
            context_keys = context.map_or(0, AuxContext::len),
            "Extracted query features"
        );

        Ok(AnalysisResult {
            query: query.to_owned(),
            normalized_query,
            entities,
            question_patterns,
            complexity,
            keywords,
            sentiment,
            metrics,
        })
    }

    fn metrics(
        query: &str,
        entity_count: usize,
        word_count: usize,
        patterns: &QuestionPatterns,
    ) -> AnalysisMetrics {
        let length_bonus = (query.chars().count() as f64 / LENGTH_SCALE).min(LENGTH_CAP);
        let entity_bonus = (entity_count as f64 / ENTITY_SCALE).min(ENTITY_CAP);
        let pattern_bonus = if patterns.has_question_pattern {
            PATTERN_BONUS
        } else {
            0.0
        };
        let presence_bonus = if entity_count > 0 {
            ENTITY_PRESENCE_BONUS
        } else {
            0.0
        };

        let entity_density = if word_count == 0 {
            0.0
        } else {
            entity_count as f64 / word_count as f64
        };

        AnalysisMetrics {
            analysis_confidence: clamp_unit(
                length_bonus + entity_bonus + pattern_bonus + presence_bonus,
            ),
            entity_density,
            question_pattern_count: patterns.pattern_count(),
            analysis_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use querylens_core::{ComplexityLevel, QuestionKind, Sentiment};
    use serde_json::{Map, Value};

    #[test]
    fn test_blank_query_is_rejected() {
        let extractor = FeatureExtractor::default();
        for query in ["", "   ", "\n\t"] {
            let error = extractor.analyze(query, None).unwrap_err();
            assert!(matches!(error, IntentError::Validation(_)));
        }
    }

    #[test]
    fn test_full_analysis() {
        let extractor = FeatureExtractor::default();
        let analysis = extractor
            .analyze("  What is the UserService class?  ", None)
            .unwrap();

        assert_eq!(analysis.normalized_query, "what is the userservice class?");
        assert_eq!(analysis.entities.classes, vec!["UserService"]);
        assert_eq!(analysis.question_patterns.primary_pattern, QuestionKind::What);
        assert_eq!(analysis.complexity.complexity_level, ComplexityLevel::Simple);
        assert_eq!(analysis.sentiment, Sentiment::LearningFocused);
        assert!(analysis.metrics.analysis_complete);
        assert_eq!(analysis.metrics.question_pattern_count, 1);
        assert!((analysis.metrics.entity_density - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_analysis_confidence_formula() {
        let extractor = FeatureExtractor::default();
        let query = "What is the UserService class?";
        let analysis = extractor.analyze(query, None).unwrap();

        // 30 chars / 200 + 1 entity / 10 + pattern + entity presence
        let expected = 30.0 / 200.0 + 0.1 + 0.2 + 0.2;
        assert!((analysis.metrics.analysis_confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_without_signal() {
        let extractor = FeatureExtractor::default();
        let analysis = extractor.analyze("hello", None).unwrap();
        assert!((analysis.metrics.analysis_confidence - 5.0 / 200.0).abs() < 1e-9);
        assert!(analysis.metrics.entity_density.abs() < f64::EPSILON);
    }

    #[test]
    fn test_context_values_do_not_change_result() {
        let extractor = FeatureExtractor::default();
        let mut context = Map::new();
        context.insert("session".to_owned(), Value::from("abc"));
        context.insert("debug".to_owned(), Value::Bool(true));

        let with_context = extractor
            .analyze("Where is the OrderRepository?", Some(&context))
            .unwrap();
        let without_context = extractor
            .analyze("Where is the OrderRepository?", None)
            .unwrap();
        assert_eq!(with_context, without_context);
    }
}
