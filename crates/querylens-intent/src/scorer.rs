//! Multi-factor heuristic scoring of every intent kind.
//!
//! Each intent's score is a sum of fixed contributions, each gated on a
//! boolean condition over the analysis. Scores are deliberately left
//! unnormalized; they can exceed 1.0 when several rules fire.

use crate::config::IntentWeights;
use querylens_core::{
    AnalysisResult, ComplexityLevel, IntentKind, QuestionKind, ScoreMap, Sentiment,
};

const ERROR_TERMS: &[&str] = &["error", "exception", "fail", "bug", "crash", "nullpointer"];
const FLOW_TERMS: &[&str] = &["flow", "process", "works"];
const SEARCH_TERMS: &[&str] = &["find", "locate", "search"];
const COMPARISON_TERMS: &[&str] = &["compare", "difference", "vs"];
const ARCHITECTURE_TERMS: &[&str] = &["architecture", "structure", "design"];
const PERFORMANCE_TERMS: &[&str] = &["performance", "slow", "optimize"];
const SPEED_TERMS: &[&str] = &["bottleneck", "fast"];
const DOCUMENTATION_TERMS: &[&str] = &["document", "explain", "describe"];
const SUMMARY_TERMS: &[&str] = &["summary", "overview"];

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

fn bonus(condition: bool, weight: f64) -> f64 {
    if condition { weight } else { 0.0 }
}

/// Scores an analysis against every intent kind.
#[derive(Debug, Clone, Default)]
pub struct IntentScorer {
    weights: IntentWeights,
}

impl IntentScorer {
    /// Create a scorer with an explicit weight table.
    #[must_use]
    pub fn new(weights: IntentWeights) -> Self {
        Self { weights }
    }

    /// Weight table in use.
    pub fn weights(&self) -> &IntentWeights {
        &self.weights
    }

    /// Score every intent kind.
    pub fn score_all(&self, analysis: &AnalysisResult, sentiment: Sentiment) -> ScoreMap {
        IntentKind::ALL
            .into_iter()
            .map(|kind| (kind, self.score(kind, analysis, sentiment)))
            .collect()
    }

    /// Score a single intent kind.
    pub fn score(&self, kind: IntentKind, analysis: &AnalysisResult, sentiment: Sentiment) -> f64 {
        let query = analysis.normalized_query.as_str();
        let primary = analysis.question_patterns.primary_pattern;
        let entities = analysis.entity_count();
        let keywords = &analysis.keywords;

        match kind {
            IntentKind::DebugIssue => {
                let weights = &self.weights.debug_issue;
                bonus(sentiment == Sentiment::ProblemFocused, weights.problem_sentiment)
                    + bonus(primary == QuestionKind::Why, weights.why_question)
                    + bonus(!keywords.debug.is_empty(), weights.debug_keywords)
                    + bonus(contains_any(query, ERROR_TERMS), weights.error_terms)
            }
            IntentKind::UnderstandFlow => {
                let weights = &self.weights.understand_flow;
                bonus(primary == QuestionKind::How, weights.how_question)
                    + bonus(contains_any(query, FLOW_TERMS), weights.flow_terms)
                    + bonus(entities > 1, weights.multiple_entities)
                    + bonus(!keywords.flow.is_empty(), weights.flow_keywords)
            }
            IntentKind::LocateEntity => {
                let weights = &self.weights.locate_entity;
                bonus(primary == QuestionKind::Where, weights.where_question)
                    + bonus(contains_any(query, SEARCH_TERMS), weights.search_terms)
                    + bonus(entities == 1, weights.single_entity)
            }
            IntentKind::CompareEntities => {
                let weights = &self.weights.compare_entities;
                bonus(contains_any(query, COMPARISON_TERMS), weights.comparison_terms)
                    + bonus(entities >= 2, weights.multiple_entities)
                    + bonus(query.contains(" and ") && entities > 1, weights.conjunction)
            }
            IntentKind::ExploreArchitecture => {
                let weights = &self.weights.explore_architecture;
                bonus(!keywords.architecture.is_empty(), weights.architecture_keywords)
                    + bonus(contains_any(query, ARCHITECTURE_TERMS), weights.architecture_terms)
                    + bonus(
                        analysis.complexity.complexity_level == ComplexityLevel::Complex,
                        weights.complex_query,
                    )
            }
            IntentKind::AnalyzePerformance => {
                let weights = &self.weights.analyze_performance;
                bonus(!keywords.performance.is_empty(), weights.performance_keywords)
                    + bonus(contains_any(query, PERFORMANCE_TERMS), weights.performance_terms)
                    + bonus(contains_any(query, SPEED_TERMS), weights.speed_terms)
            }
            IntentKind::GenerateDocumentation => {
                let weights = &self.weights.generate_documentation;
                bonus(contains_any(query, DOCUMENTATION_TERMS), weights.documentation_terms)
                    + bonus(sentiment == Sentiment::LearningFocused, weights.learning_sentiment)
                    + bonus(contains_any(query, SUMMARY_TERMS), weights.summary_terms)
            }
            IntentKind::UnderstandEntity => {
                let weights = &self.weights.understand_entity;
                weights.base
                    + bonus(primary == QuestionKind::What, weights.what_question)
                    + bonus(entities == 1, weights.single_entity)
                    + bonus(sentiment == Sentiment::LearningFocused, weights.learning_sentiment)
            }
        }
    }
}
