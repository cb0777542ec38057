//! End-to-end classification of a single query.

use crate::config::QueryLensConfig;
use crate::extractor::FeatureExtractor;
use crate::resolver::IntentResolver;
use querylens_core::{AnalysisResult, AuxContext, ResolvedIntent, Result, SessionState};
use serde::{Deserialize, Serialize};

/// Analysis together with the intent resolved from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Extracted query features
    pub analysis: AnalysisResult,
    /// Resolved intent
    pub intent: ResolvedIntent,
}

/// Chains a [`FeatureExtractor`] and an [`IntentResolver`].
#[derive(Debug, Clone, Default)]
pub struct IntentPipeline {
    extractor: FeatureExtractor,
    resolver: IntentResolver,
}

impl IntentPipeline {
    /// Create a pipeline from its stages.
    pub fn new(extractor: FeatureExtractor, resolver: IntentResolver) -> Self {
        Self {
            extractor,
            resolver,
        }
    }

    /// Build both stages from a loaded configuration.
    pub fn from_config(config: &QueryLensConfig) -> Self {
        Self::new(
            FeatureExtractor::new(config.vocabulary.clone()),
            IntentResolver::new(config.scoring.clone()),
        )
    }

    /// Extraction stage.
    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Resolution stage.
    pub fn resolver(&self) -> &IntentResolver {
        &self.resolver
    }

    /// Analyze a query and resolve its intent.
    ///
    /// # Errors
    /// Propagates validation errors from extraction and structural or internal
    /// errors from resolution unchanged.
    pub fn classify(
        &self,
        query: &str,
        context: Option<&AuxContext>,
        session: Option<&dyn SessionState>,
    ) -> Result<Classification> {
        let analysis = self.extractor.analyze(query, context)?;
        let intent = self.resolver.resolve_with_session(&analysis, session)?;
        Ok(Classification { analysis, intent })
    }
}
