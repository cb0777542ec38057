//! Intent kinds and the resolved intent returned to callers.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Score per intent kind. Iteration follows the declaration order of [`IntentKind`].
pub type ScoreMap = BTreeMap<IntentKind, f64>;

/// The purpose behind a developer query.
///
/// Declaration order is significant: it is the tie-break order when two
/// intents end up with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    /// Diagnose an error or unexpected behaviour
    DebugIssue,
    /// Follow control or data flow
    UnderstandFlow,
    /// Find where something lives
    LocateEntity,
    /// Contrast two or more entities
    CompareEntities,
    /// Survey the system's structure
    ExploreArchitecture,
    /// Investigate speed or resource usage
    AnalyzePerformance,
    /// Produce an explanation or summary
    GenerateDocumentation,
    /// Learn what a single entity is (structural default)
    UnderstandEntity,
}

impl IntentKind {
    /// Every kind in declaration order.
    pub const ALL: [Self; 8] = [
        Self::DebugIssue,
        Self::UnderstandFlow,
        Self::LocateEntity,
        Self::CompareEntities,
        Self::ExploreArchitecture,
        Self::AnalyzePerformance,
        Self::GenerateDocumentation,
        Self::UnderstandEntity,
    ];

    /// Wire name, e.g. `DEBUG_ISSUE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DebugIssue => "DEBUG_ISSUE",
            Self::UnderstandFlow => "UNDERSTAND_FLOW",
            Self::LocateEntity => "LOCATE_ENTITY",
            Self::CompareEntities => "COMPARE_ENTITIES",
            Self::ExploreArchitecture => "EXPLORE_ARCHITECTURE",
            Self::AnalyzePerformance => "ANALYZE_PERFORMANCE",
            Self::GenerateDocumentation => "GENERATE_DOCUMENTATION",
            Self::UnderstandEntity => "UNDERSTAND_ENTITY",
        }
    }

    /// Human-readable name, e.g. `debug issue`.
    pub fn humanized(self) -> String {
        self.as_str().to_lowercase().replace('_', " ")
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The winning intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryIntent {
    /// Intent kind
    pub kind: IntentKind,
    /// Raw score clamped into `[0, 1]`
    pub confidence: f64,
    /// Templated explanation sentence
    pub explanation: String,
}

/// A near-tied alternative to the primary intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryIntent {
    /// Intent kind
    pub kind: IntentKind,
    /// Raw score clamped into `[0, 1]`
    pub confidence: f64,
    /// Primary score minus this candidate's score
    pub score_difference: f64,
}

/// Result of intent resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIntent {
    /// Highest scoring intent
    pub primary: PrimaryIntent,
    /// Up to two runners-up, best first
    pub secondary: Vec<SecondaryIntent>,
    /// Every intent's raw score
    pub all_scores: ScoreMap,
    /// Primary score blended with analysis confidence, in `[0, 1]`
    pub overall_confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, to_value};

    #[test]
    fn test_declaration_order_matches_all() {
        let mut sorted = IntentKind::ALL;
        sorted.sort();
        assert_eq!(sorted, IntentKind::ALL);
        assert_eq!(IntentKind::ALL.first(), Some(&IntentKind::DebugIssue));
    }

    #[test]
    fn test_humanized_names() {
        assert_eq!(IntentKind::DebugIssue.humanized(), "debug issue");
        assert_eq!(
            IntentKind::GenerateDocumentation.humanized(),
            "generate documentation"
        );
    }

    #[test]
    fn test_score_map_serializes_with_wire_names() {
        let mut scores = ScoreMap::new();
        scores.insert(IntentKind::UnderstandEntity, 0.3);
        scores.insert(IntentKind::CompareEntities, 1.0);

        let json = to_value(&scores).unwrap();
        assert_eq!(json["UNDERSTAND_ENTITY"], Value::from(0.3));

        let keys: Vec<&IntentKind> = scores.keys().collect();
        assert_eq!(
            keys,
            vec![&IntentKind::CompareEntities, &IntentKind::UnderstandEntity]
        );
    }
}
