//! Configuration types for scoring weights, resolution thresholds and keyword vocabularies.

use querylens_core::{IntentError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Complete querylens configuration.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLensConfig {
    /// Intent weights and resolution thresholds
    pub scoring: ScoringConfig,
    /// Keyword vocabularies used during extraction
    pub vocabulary: Vocabulary,
}

/// Weight table plus the resolution parameters applied to its scores.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Additive contribution of each scoring rule
    pub weights: IntentWeights,
    /// Secondary selection and confidence blending
    pub resolution: ResolutionConfig,
}

/// Per-intent rule weights.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentWeights {
    /// `DEBUG_ISSUE` rules
    pub debug_issue: DebugIssueWeights,
    /// `UNDERSTAND_FLOW` rules
    pub understand_flow: UnderstandFlowWeights,
    /// `LOCATE_ENTITY` rules
    pub locate_entity: LocateEntityWeights,
    /// `COMPARE_ENTITIES` rules
    pub compare_entities: CompareEntitiesWeights,
    /// `EXPLORE_ARCHITECTURE` rules
    pub explore_architecture: ExploreArchitectureWeights,
    /// `ANALYZE_PERFORMANCE` rules
    pub analyze_performance: AnalyzePerformanceWeights,
    /// `GENERATE_DOCUMENTATION` rules
    pub generate_documentation: GenerateDocumentationWeights,
    /// `UNDERSTAND_ENTITY` rules
    pub understand_entity: UnderstandEntityWeights,
}

/// Weights for `DEBUG_ISSUE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugIssueWeights {
    /// Sentiment is problem-focused
    pub problem_sentiment: f64,
    /// Primary question type is WHY
    pub why_question: f64,
    /// Any debug keyword hit
    pub debug_keywords: f64,
    /// Query names an error term
    pub error_terms: f64,
}

impl Default for DebugIssueWeights {
    fn default() -> Self {
        Self {
            problem_sentiment: 0.4,
            why_question: 0.3,
            debug_keywords: 0.3,
            error_terms: 0.4,
        }
    }
}

/// Weights for `UNDERSTAND_FLOW`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderstandFlowWeights {
    /// Primary question type is HOW
    pub how_question: f64,
    /// Query mentions flow, process or works
    pub flow_terms: f64,
    /// More than one entity
    pub multiple_entities: f64,
    /// Any flow keyword hit
    pub flow_keywords: f64,
}

impl Default for UnderstandFlowWeights {
    fn default() -> Self {
        Self {
            how_question: 0.4,
            flow_terms: 0.3,
            multiple_entities: 0.2,
            flow_keywords: 0.2,
        }
    }
}

/// Weights for `LOCATE_ENTITY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateEntityWeights {
    /// Primary question type is WHERE
    pub where_question: f64,
    /// Query mentions find, locate or search
    pub search_terms: f64,
    /// Exactly one entity
    pub single_entity: f64,
}

impl Default for LocateEntityWeights {
    fn default() -> Self {
        Self {
            where_question: 0.5,
            search_terms: 0.3,
            single_entity: 0.2,
        }
    }
}

/// Weights for `COMPARE_ENTITIES`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareEntitiesWeights {
    /// Query mentions compare, difference or vs
    pub comparison_terms: f64,
    /// Two or more entities
    pub multiple_entities: f64,
    /// Entities joined by " and "
    pub conjunction: f64,
}

impl Default for CompareEntitiesWeights {
    fn default() -> Self {
        Self {
            comparison_terms: 0.5,
            multiple_entities: 0.3,
            conjunction: 0.2,
        }
    }
}

/// Weights for `EXPLORE_ARCHITECTURE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreArchitectureWeights {
    /// Any architecture keyword hit
    pub architecture_keywords: f64,
    /// Query mentions architecture, structure or design
    pub architecture_terms: f64,
    /// Complexity level is complex
    pub complex_query: f64,
}

impl Default for ExploreArchitectureWeights {
    fn default() -> Self {
        Self {
            architecture_keywords: 0.4,
            architecture_terms: 0.3,
            complex_query: 0.2,
        }
    }
}

/// Weights for `ANALYZE_PERFORMANCE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzePerformanceWeights {
    /// Any performance keyword hit
    pub performance_keywords: f64,
    /// Query mentions performance, slow or optimize
    pub performance_terms: f64,
    /// Query mentions bottleneck or fast
    pub speed_terms: f64,
}

impl Default for AnalyzePerformanceWeights {
    fn default() -> Self {
        Self {
            performance_keywords: 0.4,
            performance_terms: 0.3,
            speed_terms: 0.2,
        }
    }
}

/// Weights for `GENERATE_DOCUMENTATION`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateDocumentationWeights {
    /// Query mentions document, explain or describe
    pub documentation_terms: f64,
    /// Sentiment is learning-focused
    pub learning_sentiment: f64,
    /// Query mentions summary or overview
    pub summary_terms: f64,
}

impl Default for GenerateDocumentationWeights {
    fn default() -> Self {
        Self {
            documentation_terms: 0.3,
            learning_sentiment: 0.2,
            summary_terms: 0.2,
        }
    }
}

/// Weights for `UNDERSTAND_ENTITY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderstandEntityWeights {
    /// Always applied
    pub base: f64,
    /// Primary question type is WHAT
    pub what_question: f64,
    /// Exactly one entity
    pub single_entity: f64,
    /// Sentiment is learning-focused
    pub learning_sentiment: f64,
}

impl Default for UnderstandEntityWeights {
    fn default() -> Self {
        Self {
            base: 0.3,
            what_question: 0.3,
            single_entity: 0.2,
            learning_sentiment: 0.1,
        }
    }
}

/// Secondary-intent selection and confidence blending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Maximum gap below the primary score for a secondary candidate
    pub secondary_margin: f64,
    /// A secondary candidate must score strictly above this
    pub secondary_floor: f64,
    /// Maximum number of secondary intents
    pub max_secondary: usize,
    /// Share of the primary score in the overall confidence
    pub score_weight: f64,
    /// Share of the analysis confidence in the overall confidence
    pub analysis_weight: f64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            secondary_margin: 0.2,
            secondary_floor: 0.3,
            max_secondary: 2,
            score_weight: 0.7,
            analysis_weight: 0.3,
        }
    }
}

/// Keyword vocabularies. Every entry is a lowercase literal matched as a substring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Debugging and error terms
    pub debug: Vec<String>,
    /// Control and data flow terms
    pub flow: Vec<String>,
    /// Architecture and design terms
    pub architecture: Vec<String>,
    /// Performance terms
    pub performance: Vec<String>,
    /// Terms that mark a query as problem-focused
    pub problem: Vec<String>,
    /// Terms that mark a query as learning-focused
    pub learning: Vec<String>,
}

impl Vocabulary {
    /// Names of the categories with no terms.
    pub fn empty_categories(&self) -> Vec<&'static str> {
        [
            ("debug", &self.debug),
            ("flow", &self.flow),
            ("architecture", &self.architecture),
            ("performance", &self.performance),
            ("problem", &self.problem),
            ("learning", &self.learning),
        ]
        .into_iter()
        .filter(|(_, terms)| terms.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            debug: words(&[
                "error",
                "exception",
                "bug",
                "fail",
                "crash",
                "issue",
                "problem",
                "broken",
                "wrong",
                "null",
                "debug",
                "fix",
                "trace",
            ]),
            flow: words(&[
                "flow",
                "process",
                "execute",
                "call",
                "sequence",
                "step",
                "workflow",
                "pipeline",
                "trigger",
                "invoke",
                "lifecycle",
                "runtime",
            ]),
            architecture: words(&[
                "architecture",
                "design",
                "pattern",
                "structure",
                "component",
                "module",
                "layer",
                "dependency",
                "interface",
                "service",
                "system",
                "framework",
            ]),
            performance: words(&[
                "performance",
                "slow",
                "fast",
                "optimize",
                "bottleneck",
                "memory",
                "cpu",
                "latency",
                "throughput",
                "cache",
                "efficient",
                "scalability",
            ]),
            problem: words(&[
                "error",
                "exception",
                "fail",
                "bug",
                "crash",
                "broken",
                "issue",
                "problem",
                "wrong",
                "not working",
                "throw",
            ]),
            learning: words(&[
                "learn",
                "understand",
                "explain",
                "how",
                "what",
                "teach",
                "tutorial",
                "overview",
                "describe",
            ]),
        }
    }
}

impl QueryLensConfig {
    /// Get the default config directory path (`~/.querylens`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        use dirs::home_dir;
        let home = home_dir()
            .ok_or_else(|| IntentError::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".querylens"))
    }

    /// Get the default config file path (`~/.querylens/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from a file, falling back to defaults when it does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        use toml::from_str;
        let contents = fs::read_to_string(path)?;
        let config: Self = from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        use toml::to_string_pretty;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = to_string_pretty(self)
            .map_err(|error| IntentError::Config(format!("Failed to serialize config: {error}")))?;

        let header = "# querylens configuration\n\
                      # Weights are additive; scores are not normalized before resolution\n\n";

        fs::write(path, format!("{header}{contents}"))?;
        Ok(())
    }

    /// Reject weight tables that cannot produce meaningful scores
    ///
    /// # Errors
    /// Returns an error if a resolution parameter is negative or not finite
    pub fn validate(&self) -> Result<()> {
        let resolution = &self.scoring.resolution;
        let parameters = [
            ("secondary_margin", resolution.secondary_margin),
            ("secondary_floor", resolution.secondary_floor),
            ("score_weight", resolution.score_weight),
            ("analysis_weight", resolution.analysis_weight),
        ];

        for (name, value) in parameters {
            if !value.is_finite() || value < 0.0 {
                return Err(IntentError::Config(format!(
                    "resolution.{name} must be a non-negative number, got {value}"
                )));
            }
        }

        for category in self.vocabulary.empty_categories() {
            warn!("Vocabulary '{category}' is empty; rules using it will never fire");
        }

        Ok(())
    }
}
