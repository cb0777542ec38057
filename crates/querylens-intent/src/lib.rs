//! Rule-based intent classification for developer queries.
//!
//! A query passes through three stages:
//! - [`FeatureExtractor`] turns the raw text into an [`AnalysisResult`](querylens_core::AnalysisResult)
//! - [`IntentScorer`] scores every intent kind against the analysis
//! - [`IntentResolver`] picks the primary and secondary intents and blends a confidence
//!
//! [`IntentPipeline`] chains the stages, and the [`tools`] module wraps them
//! into response envelopes.
#![cfg_attr(
    test,
    allow(
        dead_code,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::print_stdout,
        clippy::print_stderr,
        reason = "Test allows"
    )
)]

/// Scoring weights, resolution thresholds and vocabularies
pub mod config;
/// Feature extraction
pub mod extractor;
/// Extractor and resolver chained together
pub mod pipeline;
/// Primary and secondary intent selection
pub mod resolver;
/// Per-intent heuristic scoring
pub mod scorer;
/// Tool wrappers producing response envelopes
pub mod tools;

pub use config::{
    AnalyzePerformanceWeights, CompareEntitiesWeights, DebugIssueWeights,
    ExploreArchitectureWeights, GenerateDocumentationWeights, IntentWeights,
    LocateEntityWeights, QueryLensConfig, ResolutionConfig, ScoringConfig,
    UnderstandEntityWeights, UnderstandFlowWeights, Vocabulary,
};
pub use extractor::FeatureExtractor;
pub use pipeline::{Classification, IntentPipeline};
pub use resolver::IntentResolver;
pub use scorer::IntentScorer;
pub use tools::{
    AnalyzeQueryTool, AnalyzeRequest, ClassifyQueryTool, IntentTool, ResolveIntentTool,
    ResolveRequest,
};
