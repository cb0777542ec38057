//! Types produced by feature extraction.

use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque caller-supplied context; keys may be echoed, values are never inspected.
pub type AuxContext = Map<String, Value>;

/// Clamp a value into `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Full structured analysis of a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The raw query as received
    pub query: String,
    /// Trimmed, lower-cased query used for pattern and keyword matching
    pub normalized_query: String,
    /// Code entities mentioned in the query
    pub entities: ExtractedEntities,
    /// Interrogative patterns detected in the query
    pub question_patterns: QuestionPatterns,
    /// Size and structure based complexity
    pub complexity: ComplexityAssessment,
    /// Category keyword hits
    pub keywords: KeywordHits,
    /// Whether the query reads as a problem report or a learning request
    pub sentiment: Sentiment,
    /// Quality metrics of the analysis itself
    pub metrics: AnalysisMetrics,
}

impl AnalysisResult {
    /// Total number of entities found across all categories.
    pub fn entity_count(&self) -> usize {
        self.entities.counts.total
    }
}

/// Entities extracted from the raw query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Class-like identifiers (`UserService`, `OrderDTO`)
    pub classes: Vec<String>,
    /// Method-call-like identifiers without their parentheses
    pub methods: Vec<String>,
    /// Dotted lowercase package names
    pub packages: Vec<String>,
    /// Union of all three lists in first-occurrence order
    pub all_entities: Vec<String>,
    /// Derived counts
    pub counts: EntityCounts,
}

impl ExtractedEntities {
    /// Build the entity record, deriving the union and the counts from the lists.
    pub fn new(classes: Vec<String>, methods: Vec<String>, packages: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let all_entities = classes
            .iter()
            .chain(&methods)
            .chain(&packages)
            .filter(|entity| seen.insert(entity.as_str()))
            .cloned()
            .collect();
        let counts = EntityCounts::new(classes.len(), methods.len(), packages.len());

        Self {
            classes,
            methods,
            packages,
            all_entities,
            counts,
        }
    }

    /// Whether the stored counts agree with the entity lists.
    pub fn counts_consistent(&self) -> bool {
        self.counts == EntityCounts::new(self.classes.len(), self.methods.len(), self.packages.len())
    }
}

/// Per-category entity counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    /// Number of class-like entities
    pub classes: usize,
    /// Number of method-like entities
    pub methods: usize,
    /// Number of package-like entities
    pub packages: usize,
    /// Sum of the three counts
    pub total: usize,
}

impl EntityCounts {
    /// Create counts; the total is always the sum of the parts.
    pub fn new(classes: usize, methods: usize, packages: usize) -> Self {
        Self {
            classes,
            methods,
            packages,
            total: classes + methods + packages,
        }
    }
}

/// Question type of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    /// "what is", "which are"
    What,
    /// "how does", "how do"
    How,
    /// "where is", "where are"
    Where,
    /// "why"
    Why,
    /// "when", "during", "at what"
    When,
    /// No interrogative pattern matched
    Unknown,
}

impl QuestionKind {
    /// Detectable kinds in priority order.
    pub const PRIORITY: [Self; 5] = [Self::What, Self::How, Self::Where, Self::Why, Self::When];

    /// Upper-case name as used in explanations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::What => "WHAT",
            Self::How => "HOW",
            Self::Where => "WHERE",
            Self::Why => "WHY",
            Self::When => "WHEN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Interrogative patterns found in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools, reason = "One flag per question kind is the wire format")]
pub struct QuestionPatterns {
    /// `what`/`which` followed by a copula or auxiliary
    pub what: bool,
    /// `how` followed by `does`/`do`/`works`/`work`
    pub how: bool,
    /// `where` followed by `is`/`are`
    pub r#where: bool,
    /// `why` anywhere in the query
    pub why: bool,
    /// `when`/`during`/`at what`
    pub when: bool,
    /// First matched kind in priority order
    pub primary_pattern: QuestionKind,
    /// Whether any pattern matched
    pub has_question_pattern: bool,
}

impl QuestionPatterns {
    /// Build the pattern record from individual flags, resolving the primary kind.
    #[allow(clippy::fn_params_excessive_bools, reason = "Flags mirror the struct fields")]
    pub fn from_flags(what: bool, how: bool, r#where: bool, why: bool, when: bool) -> Self {
        let flags = [what, how, r#where, why, when];
        let primary_pattern = QuestionKind::PRIORITY
            .into_iter()
            .zip(flags)
            .find_map(|(kind, matched)| matched.then_some(kind))
            .unwrap_or(QuestionKind::Unknown);

        Self {
            what,
            how,
            r#where,
            why,
            when,
            primary_pattern,
            has_question_pattern: flags.contains(&true),
        }
    }

    /// Whether the given kind matched.
    pub fn matched(&self, kind: QuestionKind) -> bool {
        match kind {
            QuestionKind::What => self.what,
            QuestionKind::How => self.how,
            QuestionKind::Where => self.r#where,
            QuestionKind::Why => self.why,
            QuestionKind::When => self.when,
            QuestionKind::Unknown => !self.has_question_pattern,
        }
    }

    /// Number of matched patterns.
    pub fn pattern_count(&self) -> usize {
        QuestionKind::PRIORITY
            .into_iter()
            .filter(|kind| self.matched(*kind))
            .count()
    }
}

/// Complexity bucket of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    /// Score below 0.3
    Simple,
    /// Score in `[0.3, 0.7)`
    Moderate,
    /// Score of 0.7 or more
    Complex,
}

impl ComplexityLevel {
    /// Lower bound of the moderate bucket
    pub const MODERATE_THRESHOLD: f64 = 0.3;
    /// Lower bound of the complex bucket
    pub const COMPLEX_THRESHOLD: f64 = 0.7;

    /// Bucket a complexity score.
    pub fn from_score(score: f64) -> Self {
        if score < Self::MODERATE_THRESHOLD {
            Self::Simple
        } else if score < Self::COMPLEX_THRESHOLD {
            Self::Moderate
        } else {
            Self::Complex
        }
    }
}

/// Size and structure based complexity of a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Non-blank segments between sentence terminators
    pub sentence_count: usize,
    /// Entities found by extraction
    pub entity_count: usize,
    /// Weighted score in `[0, 1]`
    pub complexity_score: f64,
    /// Bucketed score
    pub complexity_level: ComplexityLevel,
}

/// Keyword hits per vocabulary category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHits {
    /// Debugging and error terms
    pub debug: Vec<String>,
    /// Control and data flow terms
    pub flow: Vec<String>,
    /// Architecture and design terms
    pub architecture: Vec<String>,
    /// Performance terms
    pub performance: Vec<String>,
    /// Sum of all hit lists
    pub total_keywords: usize,
}

impl KeywordHits {
    /// Build the hit record, deriving the total.
    pub fn new(
        debug: Vec<String>,
        flow: Vec<String>,
        architecture: Vec<String>,
        performance: Vec<String>,
    ) -> Self {
        let total_keywords = debug.len() + flow.len() + architecture.len() + performance.len();
        Self {
            debug,
            flow,
            architecture,
            performance,
            total_keywords,
        }
    }
}

/// Tone of the query, used as a scoring signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    /// Reports a failure or something broken
    ProblemFocused,
    /// Asks to learn or understand something
    LearningFocused,
    /// Neither
    #[default]
    Neutral,
}

/// Quality metrics of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Confidence in the extracted features, in `[0, 1]`
    pub analysis_confidence: f64,
    /// Entities per word, zero for an empty word list
    pub entity_density: f64,
    /// Number of matched question patterns
    pub question_pattern_count: usize,
    /// Set once every extraction stage ran
    pub analysis_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|&item| item.to_owned()).collect()
    }

    #[test]
    fn test_entity_counts_are_derived() {
        let entities = ExtractedEntities::new(
            owned(&["UserService", "OrderController"]),
            owned(&["findById"]),
            owned(&["com.example"]),
        );

        assert_eq!(entities.counts.classes, 2);
        assert_eq!(entities.counts.methods, 1);
        assert_eq!(entities.counts.packages, 1);
        assert_eq!(entities.counts.total, 4);
        assert_eq!(entities.all_entities.len(), 4);
        assert!(entities.counts_consistent());
    }

    #[test]
    fn test_union_drops_cross_list_duplicates() {
        let entities =
            ExtractedEntities::new(owned(&["Parser"]), owned(&["Parser"]), Vec::new());
        assert_eq!(entities.all_entities, owned(&["Parser"]));
        assert_eq!(entities.counts.total, 2);
    }

    #[test]
    fn test_tampered_counts_are_inconsistent() {
        let mut entities = ExtractedEntities::new(owned(&["UserService"]), Vec::new(), Vec::new());
        entities.counts.total = 5;
        assert!(!entities.counts_consistent());
    }

    #[test]
    fn test_primary_pattern_priority() {
        let patterns = QuestionPatterns::from_flags(false, true, true, true, true);
        assert_eq!(patterns.primary_pattern, QuestionKind::How);
        assert_eq!(patterns.pattern_count(), 4);

        let everything = QuestionPatterns::from_flags(true, true, true, true, true);
        assert_eq!(everything.primary_pattern, QuestionKind::What);

        let last = QuestionPatterns::from_flags(false, false, false, false, true);
        assert_eq!(last.primary_pattern, QuestionKind::When);
    }

    #[test]
    fn test_no_pattern_is_unknown() {
        let patterns = QuestionPatterns::from_flags(false, false, false, false, false);
        assert_eq!(patterns.primary_pattern, QuestionKind::Unknown);
        assert!(!patterns.has_question_pattern);
        assert_eq!(patterns.pattern_count(), 0);
    }

    #[test]
    fn test_complexity_level_thresholds() {
        assert_eq!(ComplexityLevel::from_score(0.0), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::from_score(0.29), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::from_score(0.3), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::from_score(0.69), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::from_score(0.7), ComplexityLevel::Complex);
        assert_eq!(ComplexityLevel::from_score(1.0), ComplexityLevel::Complex);
    }

    #[test]
    fn test_where_flag_serializes_without_prefix() {
        let patterns = QuestionPatterns::from_flags(false, false, true, false, false);
        let json = to_value(patterns).unwrap();
        assert_eq!(json["where"], Value::Bool(true));
        assert_eq!(json["primary_pattern"], Value::from("WHERE"));
    }

    #[test]
    fn test_clamp_unit() {
        assert!(clamp_unit(1.4) <= 1.0);
        assert!(clamp_unit(-0.2) >= 0.0);
        assert!((clamp_unit(0.25) - 0.25).abs() < f64::EPSILON);
    }
}
