//! Intent resolution: primary and secondary selection, explanation and confidence.

use crate::config::{ResolutionConfig, ScoringConfig};
use crate::scorer::IntentScorer;
use querylens_core::{
    AnalysisResult, INTENT_CONFIDENCE_KEY, IntentError, IntentKind, PrimaryIntent, QuestionKind,
    RESOLVED_INTENT_KEY, ResolvedIntent, Result, ScoreMap, SecondaryIntent, SessionState,
    clamp_unit,
};
use serde_json::{Value, from_value};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Scores closer than this are treated as equal.
const SCORE_EPSILON: f64 = 1e-9;

/// Resolves an analysis into a primary intent, runners-up and a confidence.
#[derive(Debug, Clone, Default)]
pub struct IntentResolver {
    scorer: IntentScorer,
    resolution: ResolutionConfig,
}

impl IntentResolver {
    /// Create a resolver from a scoring configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scorer: IntentScorer::new(config.weights),
            resolution: config.resolution,
        }
    }

    /// Scorer used by this resolver.
    pub fn scorer(&self) -> &IntentScorer {
        &self.scorer
    }

    /// Resolve an analysis without recording the result anywhere.
    ///
    /// # Errors
    /// Returns [`IntentError::Structural`] for an incomplete or inconsistent
    /// analysis and [`IntentError::Internal`] if scoring produces a non-finite value.
    pub fn resolve(&self, analysis: &AnalysisResult) -> Result<ResolvedIntent> {
        self.resolve_with_session(analysis, None)
    }

    /// Resolve an analysis, writing the outcome to `session` when one is given.
    ///
    /// # Errors
    /// Same as [`Self::resolve`]. Nothing is written to the session on error.
    pub fn resolve_with_session(
        &self,
        analysis: &AnalysisResult,
        session: Option<&dyn SessionState>,
    ) -> Result<ResolvedIntent> {
        validate_structure(analysis)?;

        let all_scores = self.scorer.score_all(analysis, analysis.sentiment);
        if let Some((kind, score)) = all_scores.iter().find(|(_, score)| !score.is_finite()) {
            return Err(IntentError::Internal(format!(
                "score for {kind} is not finite: {score}"
            )));
        }
        debug!(?all_scores, "Scored intents");

        let (primary_kind, primary_score) = select_primary(&all_scores)?;
        let secondary = self.select_secondary(&all_scores, primary_kind, primary_score);

        let primary_confidence = clamp_unit(primary_score);
        let overall_confidence = clamp_unit(primary_score.mul_add(
            self.resolution.score_weight,
            analysis.metrics.analysis_confidence * self.resolution.analysis_weight,
        ));
        if !overall_confidence.is_finite() {
            return Err(IntentError::Internal(
                "overall confidence is not finite".to_owned(),
            ));
        }

        let resolved = ResolvedIntent {
            primary: PrimaryIntent {
                kind: primary_kind,
                confidence: primary_confidence,
                explanation: explain(
                    primary_kind,
                    primary_confidence,
                    analysis.question_patterns.primary_pattern,
                ),
            },
            secondary,
            all_scores,
            overall_confidence,
        };

        info!(
            intent = %resolved.primary.kind,
            confidence = resolved.overall_confidence,
            secondary = resolved.secondary.len(),
            "Resolved intent"
        );

        if let Some(sink) = session {
            sink.put(RESOLVED_INTENT_KEY, Value::from(primary_kind.as_str()));
            sink.put(INTENT_CONFIDENCE_KEY, Value::from(overall_confidence));
        }

        Ok(resolved)
    }

    /// Resolve an analysis supplied as untyped JSON.
    ///
    /// # Errors
    /// Returns [`IntentError::Structural`] if the value is not a well-formed
    /// analysis, otherwise the same errors as [`Self::resolve`].
    pub fn resolve_json(&self, analysis: &Value) -> Result<ResolvedIntent> {
        let parsed: AnalysisResult = from_value(analysis.clone())
            .map_err(|err| IntentError::Structural(format!("malformed analysis: {err}")))?;
        self.resolve(&parsed)
    }

    fn select_secondary(
        &self,
        scores: &ScoreMap,
        primary_kind: IntentKind,
        primary_score: f64,
    ) -> Vec<SecondaryIntent> {
        let mut candidates: Vec<(IntentKind, f64)> = scores
            .iter()
            .filter(|(kind, score)| {
                **kind != primary_kind
                    && **score >= primary_score - self.resolution.secondary_margin - SCORE_EPSILON
                    && **score > self.resolution.secondary_floor + SCORE_EPSILON
            })
            .map(|(kind, score)| (*kind, *score))
            .collect();

        // Stable sort keeps declaration order among equal scores
        candidates.sort_by(|left, right| compare_scores(right.1, left.1));
        candidates.truncate(self.resolution.max_secondary);

        candidates
            .into_iter()
            .map(|(kind, score)| SecondaryIntent {
                kind,
                confidence: clamp_unit(score),
                score_difference: (primary_score - score).max(0.0),
            })
            .collect()
    }
}

/// Highest score wins; the earliest kind wins ties.
fn select_primary(scores: &ScoreMap) -> Result<(IntentKind, f64)> {
    let mut best: Option<(IntentKind, f64)> = None;
    for (kind, score) in scores {
        if best.is_none_or(|(_, best_score)| *score > best_score + SCORE_EPSILON) {
            best = Some((*kind, *score));
        }
    }
    best.ok_or_else(|| IntentError::Internal("no intent scores were produced".to_owned()))
}

/// Order two scores, treating near-equal sums as ties.
fn compare_scores(left: f64, right: f64) -> Ordering {
    if (left - right).abs() <= SCORE_EPSILON {
        Ordering::Equal
    } else {
        left.total_cmp(&right)
    }
}

fn validate_structure(analysis: &AnalysisResult) -> Result<()> {
    if !analysis.metrics.analysis_complete {
        return Err(IntentError::Structural(
            "analysis is marked incomplete".to_owned(),
        ));
    }
    if analysis.normalized_query.trim().is_empty() {
        return Err(IntentError::Structural(
            "analysis has no normalized query".to_owned(),
        ));
    }
    if !analysis.entities.counts_consistent() {
        return Err(IntentError::Structural(
            "entity counts do not match the entity lists".to_owned(),
        ));
    }
    Ok(())
}

fn describe(kind: IntentKind) -> &'static str {
    match kind {
        IntentKind::DebugIssue => "The query describes a problem or error to diagnose",
        IntentKind::UnderstandFlow => "The query asks how execution or data moves through the code",
        IntentKind::LocateEntity => "The query asks where a code entity is defined or used",
        IntentKind::CompareEntities => "The query contrasts two or more code entities",
        IntentKind::ExploreArchitecture => "The query explores the structure and design of the system",
        IntentKind::AnalyzePerformance => "The query is concerned with speed or resource usage",
        IntentKind::GenerateDocumentation => "The query asks for an explanation or summary",
        IntentKind::UnderstandEntity => "The query asks what a specific code entity is or does",
    }
}

fn explain(kind: IntentKind, confidence: f64, question: QuestionKind) -> String {
    let mut explanation = format!(
        "Resolved intent '{}' with {:.0}% confidence. {}",
        kind.humanized(),
        confidence * 100.0,
        describe(kind)
    );
    if question == QuestionKind::Unknown {
        explanation.push('.');
    } else {
        explanation.push_str(", Primary question type: ");
        explanation.push_str(question.as_str());
        explanation.push('.');
    }
    explanation
}
