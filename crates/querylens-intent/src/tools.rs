//! Typed tool surface over the classification pipeline.
//!
//! Every tool takes a request, runs one pipeline operation and wraps the
//! outcome in a [`ToolResponse`]. Errors never escape a tool: they become the
//! error envelope.

use std::sync::Arc;
use std::time::Instant;

use crate::pipeline::{Classification, IntentPipeline};
use querylens_core::{
    AnalysisResult, AuxContext, IntentError, ResolvedIntent, Result, SessionState, ToolResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_str, to_value};
use tracing::{debug, warn};

/// A named operation that produces a [`ToolResponse`].
pub trait IntentTool: Send + Sync {
    /// Request accepted by the tool.
    type Request;
    /// Data carried by a success envelope.
    type Output: Serialize;

    /// Stable identifier of the tool.
    fn name(&self) -> &'static str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &'static str;

    /// Context keys to echo in the response metadata.
    fn context_keys(&self, _request: &Self::Request) -> Vec<String> {
        Vec::new()
    }

    /// Run the underlying operation.
    ///
    /// # Errors
    /// Returns whichever [`IntentError`] the operation produced.
    fn execute(&self, request: Self::Request) -> Result<Self::Output>;

    /// Run the operation, timing it and converting the outcome into an envelope.
    fn run(&self, request: Self::Request) -> ToolResponse<Self::Output> {
        let context_keys = self.context_keys(&request);
        let started = Instant::now();
        let result = self.execute(request);
        let elapsed = started.elapsed();

        if let Err(err) = &result {
            warn!(tool = self.name(), kind = ?err.kind(), "Tool failed: {err}");
        }
        debug!(tool = self.name(), ?elapsed, "Tool finished");
        ToolResponse::from_result(self.name(), elapsed, context_keys, result)
    }
}

/// Request for tools that start from a raw query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Query text; required
    pub query: Option<String>,
    /// Opaque caller context, keys are echoed back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<AuxContext>,
}

impl AnalyzeRequest {
    /// Request for the given query without context.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            context: None,
        }
    }

    /// Attach an auxiliary context.
    #[must_use]
    pub fn with_context(mut self, context: AuxContext) -> Self {
        self.context = Some(context);
        self
    }

    fn query(&self) -> Result<&str> {
        self.query
            .as_deref()
            .ok_or_else(|| IntentError::Validation("query is required".to_owned()))
    }

    fn keys(&self) -> Vec<String> {
        self.context
            .as_ref()
            .map_or_else(Vec::new, |context| context.keys().cloned().collect())
    }
}

/// Request for resolving a previously produced analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Analysis as JSON; validated during resolution
    pub analysis: Value,
}

impl ResolveRequest {
    /// Request for an already typed analysis.
    ///
    /// # Errors
    /// Returns [`IntentError::Json`] if the analysis cannot be serialized.
    pub fn from_analysis(analysis: &AnalysisResult) -> Result<Self> {
        Ok(Self {
            analysis: to_value(analysis)?,
        })
    }

    /// Parse a request from JSON text.
    ///
    /// Accepts either `{"analysis": {...}}` or a bare analysis object.
    ///
    /// # Errors
    /// Returns [`IntentError::Structural`] if the text is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = from_str(text)
            .map_err(|err| IntentError::Structural(format!("analysis is not valid JSON: {err}")))?;
        let analysis = match value {
            Value::Object(mut object) => object
                .remove("analysis")
                .unwrap_or_else(|| Value::Object(object)),
            other => other,
        };
        Ok(Self { analysis })
    }
}

/// `analyze_query`: extract features from a query.
#[derive(Debug, Clone)]
pub struct AnalyzeQueryTool {
    pipeline: Arc<IntentPipeline>,
}

impl AnalyzeQueryTool {
    /// Create the tool over a shared pipeline.
    pub fn new(pipeline: Arc<IntentPipeline>) -> Self {
        Self { pipeline }
    }
}

impl IntentTool for AnalyzeQueryTool {
    type Request = AnalyzeRequest;
    type Output = AnalysisResult;

    fn name(&self) -> &'static str {
        "analyze_query"
    }

    fn description(&self) -> &'static str {
        "Extract entities, question patterns, complexity, keywords and sentiment from a developer query"
    }

    fn context_keys(&self, request: &AnalyzeRequest) -> Vec<String> {
        request.keys()
    }

    fn execute(&self, request: AnalyzeRequest) -> Result<AnalysisResult> {
        self.pipeline
            .extractor()
            .analyze(request.query()?, request.context.as_ref())
    }
}

/// `resolve_intent`: resolve the intent of an existing analysis.
#[derive(Debug, Clone)]
pub struct ResolveIntentTool {
    pipeline: Arc<IntentPipeline>,
}

impl ResolveIntentTool {
    /// Create the tool over a shared pipeline.
    pub fn new(pipeline: Arc<IntentPipeline>) -> Self {
        Self { pipeline }
    }
}

impl IntentTool for ResolveIntentTool {
    type Request = ResolveRequest;
    type Output = ResolvedIntent;

    fn name(&self) -> &'static str {
        "resolve_intent"
    }

    fn description(&self) -> &'static str {
        "Score every intent for an analysis and resolve the primary and secondary intents"
    }

    fn execute(&self, request: ResolveRequest) -> Result<ResolvedIntent> {
        self.pipeline.resolver().resolve_json(&request.analysis)
    }
}

/// `classify_query`: analyze a query and resolve its intent in one call.
#[derive(Clone)]
pub struct ClassifyQueryTool {
    pipeline: Arc<IntentPipeline>,
    session: Option<Arc<dyn SessionState>>,
}

impl ClassifyQueryTool {
    /// Create the tool over a shared pipeline.
    pub fn new(pipeline: Arc<IntentPipeline>) -> Self {
        Self {
            pipeline,
            session: None,
        }
    }

    /// Record every resolved intent in the given session.
    #[must_use]
    pub fn with_session(mut self, session: Arc<dyn SessionState>) -> Self {
        self.session = Some(session);
        self
    }
}

impl IntentTool for ClassifyQueryTool {
    type Request = AnalyzeRequest;
    type Output = Classification;

    fn name(&self) -> &'static str {
        "classify_query"
    }

    fn description(&self) -> &'static str {
        "Analyze a developer query and resolve the intent behind it"
    }

    fn context_keys(&self, request: &AnalyzeRequest) -> Vec<String> {
        request.keys()
    }

    fn execute(&self, request: AnalyzeRequest) -> Result<Classification> {
        self.pipeline.classify(
            request.query()?,
            request.context.as_ref(),
            self.session.as_deref(),
        )
    }
}
