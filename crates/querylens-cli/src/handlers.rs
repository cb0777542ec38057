//! Command handlers for CLI operations

use anyhow::Result;
use querylens_core::{
    AuxContext, IntentError, MemorySessionState, Result as IntentResult, ToolResponse,
};
use querylens_intent::{
    AnalyzeQueryTool, AnalyzeRequest, ClassifyQueryTool, IntentPipeline, IntentTool as _,
    QueryLensConfig, ResolveIntentTool, ResolveRequest,
};
use serde::Serialize;
use serde_json::{Value, json, to_string, to_string_pretty, to_value};
use std::fs;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Install the tracing subscriber. Logs go to stderr so stdout carries only JSON.
pub fn init_logging() {
    Registry::default()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "querylens_intent=info,querylens_cli=info".into()),
        )
        .with(fmt::layer().with_writer(stderr).with_target(true))
        .init();
}

/// Load the configuration from an explicit path, or the default location when absent.
///
/// # Errors
/// Returns an error if an explicit file is missing, or any file fails to parse or validate
pub fn load_config(explicit: Option<&Path>) -> IntentResult<QueryLensConfig> {
    if let Some(path) = explicit {
        return QueryLensConfig::load_from_file(path);
    }

    QueryLensConfig::config_path().map_or_else(
        |error| {
            warn!("Failed to locate config directory: {error}");
            warn!("Using default configuration");
            Ok(QueryLensConfig::default())
        },
        |path| QueryLensConfig::load_or_default(&path),
    )
}

/// Command execution context shared by every handler
pub struct Runner {
    pipeline: Arc<IntentPipeline>,
    pretty: bool,
}

impl Runner {
    /// Create a runner over the given configuration
    pub fn new(config: &QueryLensConfig, pretty: bool) -> Self {
        Self {
            pipeline: Arc::new(IntentPipeline::from_config(config)),
            pretty,
        }
    }

    /// Handle `analyze`
    ///
    /// # Errors
    /// Returns an error if the response cannot be serialized
    pub fn analyze(&self, query: String, context: Vec<(String, String)>) -> Result<ExitCode> {
        let tool = AnalyzeQueryTool::new(Arc::clone(&self.pipeline));
        let response = tool.run(build_request(query, context));
        emit(&response, self.pretty)
    }

    /// Handle `classify`, optionally recording the result in a session
    ///
    /// # Errors
    /// Returns an error if the response cannot be serialized
    pub fn classify(
        &self,
        query: String,
        context: Vec<(String, String)>,
        session_id: Option<String>,
    ) -> Result<ExitCode> {
        let mut tool = ClassifyQueryTool::new(Arc::clone(&self.pipeline));
        let session = session_id.map(|id| (id, Arc::new(MemorySessionState::new())));
        if let Some((_, state)) = &session {
            tool = tool.with_session(Arc::<MemorySessionState>::clone(state));
        }

        let response = tool.run(build_request(query, context));

        if let Some((id, state)) = session {
            let mut entries: Vec<(String, Value)> = state.snapshot().into_iter().collect();
            entries.sort_by(|left, right| left.0.cmp(&right.0));
            info!(session = %id, ?entries, "Recorded session state");
        }

        emit(&response, self.pretty)
    }

    /// Handle `resolve`
    ///
    /// # Errors
    /// Returns an error if the response cannot be serialized
    pub fn resolve(&self, path: &Path) -> Result<ExitCode> {
        let request = fs::read_to_string(path)
            .map_err(IntentError::from)
            .and_then(|text| ResolveRequest::from_json(&text));

        request.map_or_else(
            |error| emit(&ToolResponse::<Value>::failure(&error), self.pretty),
            |parsed| {
                let tool = ResolveIntentTool::new(Arc::clone(&self.pipeline));
                emit(&tool.run(parsed), self.pretty)
            },
        )
    }
}

/// Handle `config`
///
/// # Errors
/// Returns an error if the output cannot be serialized
pub fn handle_config(
    explicit: Option<PathBuf>,
    config: &QueryLensConfig,
    full: bool,
    pretty: bool,
) -> Result<ExitCode> {
    let path = explicit.or_else(|| QueryLensConfig::config_path().ok());

    let exists = path.as_ref().is_some_and(|location| location.exists());
    let mut summary = json!({
        "path": path.as_ref().map(|location| location.display().to_string()),
        "exists": exists,
    });
    if full {
        summary["config"] = to_value(config)?;
    }

    print_json(&summary, pretty)?;
    Ok(ExitCode::SUCCESS)
}

/// Print a failure envelope for an error raised before any tool ran
///
/// # Errors
/// Returns an error if the envelope cannot be serialized
pub fn emit_failure(error: &IntentError, pretty: bool) -> Result<ExitCode> {
    emit(&ToolResponse::<Value>::failure(error), pretty)
}

fn build_request(query: String, context: Vec<(String, String)>) -> AnalyzeRequest {
    let request = AnalyzeRequest::new(query);
    if context.is_empty() {
        return request;
    }

    let context: AuxContext = context
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect();
    request.with_context(context)
}

fn emit<T: Serialize>(response: &ToolResponse<T>, pretty: bool) -> Result<ExitCode> {
    print_json(response, pretty)?;
    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        to_string_pretty(value)?
    } else {
        to_string(value)?
    };

    #[allow(clippy::print_stdout, reason = "JSON output is the CLI's result")]
    {
        println!("{rendered}");
    }
    Ok(())
}
