//! Response envelope shared by every tool.
//!
//! A response is either a success carrying data plus metadata, or an error
//! carrying a message, a category and details. The two shapes never mix: an
//! error envelope has no data field at all.

use core::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ErrorKind, IntentError, Result};

/// Metadata attached to successful responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Name of the tool that produced the response
    pub tool_name: String,
    /// Wall-clock time spent in the tool
    pub execution_time_ms: u64,
    /// Keys of the auxiliary context supplied with the request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context_keys: Vec<String>,
}

/// Envelope returned by a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResponse<T> {
    /// The tool completed
    Success {
        /// Tool output
        data: T,
        /// Invocation metadata
        metadata: ResponseMetadata,
    },
    /// The tool failed; no partial data is carried
    Error {
        /// Human-readable error message
        error: String,
        /// Error category
        kind: ErrorKind,
        /// Structured error details
        details: Map<String, Value>,
    },
}

impl<T> ToolResponse<T> {
    /// Wrap a tool result into an envelope.
    pub fn from_result(
        tool_name: &str,
        elapsed: Duration,
        context_keys: Vec<String>,
        result: Result<T>,
    ) -> Self {
        result.map_or_else(
            |error| Self::failure(&error),
            |data| Self::Success {
                data,
                metadata: ResponseMetadata {
                    tool_name: tool_name.to_owned(),
                    execution_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    context_keys,
                },
            },
        )
    }

    /// Build an error envelope.
    pub fn failure(error: &IntentError) -> Self {
        Self::Error {
            error: error.to_string(),
            kind: error.kind(),
            details: error.details(),
        }
    }

    /// Whether this is a success envelope.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Data of a success envelope.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Category of an error envelope.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }
}
