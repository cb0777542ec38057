//! Core types for querylens.
//!
//! This crate provides the analysis and intent data model, the error taxonomy,
//! the response envelope returned by tools and the write-only session state
//! capability used across the querylens crates.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Test allows"
    )
)]

/// Feature extraction output: entities, question patterns, complexity, keywords.
pub mod analysis;
/// Error types and result definitions.
pub mod error;
/// Intent kinds, score maps and resolved intents.
pub mod intent;
/// Success and error envelopes returned by tools.
pub mod response;
/// Session state sink written after an intent is resolved.
pub mod session;

pub use analysis::{
    AnalysisMetrics, AnalysisResult, AuxContext, ComplexityAssessment, ComplexityLevel,
    EntityCounts, ExtractedEntities, KeywordHits, QuestionKind, QuestionPatterns, Sentiment,
    clamp_unit,
};
pub use error::{ErrorKind, IntentError, Result};
pub use intent::{IntentKind, PrimaryIntent, ResolvedIntent, ScoreMap, SecondaryIntent};
pub use response::{ResponseMetadata, ToolResponse};
pub use session::{INTENT_CONFIDENCE_KEY, MemorySessionState, RESOLVED_INTENT_KEY, SessionState};
