use core::result::Result as CoreResult;
use std::io::Error as IoError;

use serde::{Deserialize, Serialize};
use serde_json::{Error as SerdeJsonError, Map, Value};
use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for querylens operations.
pub type Result<T> = CoreResult<T, IntentError>;

/// Errors that can occur while analyzing a query or resolving its intent.
#[derive(Debug, Error)]
pub enum IntentError {
    /// The required query was missing, empty or blank.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An analysis handed to the resolver was malformed or incomplete.
    #[error("Structural error: {0}")]
    Structural(String),

    /// Scoring or explanation generation hit an unexpected fault.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration is invalid or could not be written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),
}

/// Error category reported in error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Blank or missing required input
    ValidationError,
    /// Malformed upstream analysis
    StructuralError,
    /// Unexpected fault inside the pipeline
    InternalError,
    /// Unreadable or invalid configuration
    ConfigurationError,
}

impl IntentError {
    /// Category used when this error is turned into an error envelope.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::Structural(_) => ErrorKind::StructuralError,
            Self::Config(_) | Self::Toml(_) => ErrorKind::ConfigurationError,
            Self::Internal(_) | Self::Io(_) | Self::Json(_) => ErrorKind::InternalError,
        }
    }

    /// Structured details attached to the error envelope.
    pub fn details(&self) -> Map<String, Value> {
        let source = match self {
            Self::Validation(_) => "input",
            Self::Structural(_) => "analysis",
            Self::Internal(_) => "pipeline",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Toml(_) => "toml",
        };

        let mut details = Map::new();
        details.insert("source".to_owned(), Value::from(source));
        details.insert("message".to_owned(), Value::from(self.to_string()));
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as JsonValue, from_str, to_value};
    use std::io;

    #[test]
    fn test_error_display() {
        let validation = IntentError::Validation("query must not be blank".to_owned());
        assert_eq!(
            validation.to_string(),
            "Validation error: query must not be blank"
        );

        let structural = IntentError::Structural("analysis is incomplete".to_owned());
        assert_eq!(
            structural.to_string(),
            "Structural error: analysis is incomplete"
        );
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            IntentError::Validation(String::new()).kind(),
            ErrorKind::ValidationError
        );
        assert_eq!(
            IntentError::Structural(String::new()).kind(),
            ErrorKind::StructuralError
        );
        assert_eq!(
            IntentError::Internal(String::new()).kind(),
            ErrorKind::InternalError
        );
        assert_eq!(
            IntentError::Config(String::new()).kind(),
            ErrorKind::ConfigurationError
        );

        let io_error: IntentError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert_eq!(io_error.kind(), ErrorKind::InternalError);
    }

    #[test]
    fn test_error_from_json() {
        let json_error = from_str::<JsonValue>("invalid json").unwrap_err();
        let error: IntentError = json_error.into();
        assert!(matches!(error, IntentError::Json(_)));
    }

    #[test]
    fn test_error_kind_serializes_screaming() {
        let value = to_value(ErrorKind::ValidationError).unwrap();
        assert_eq!(value, JsonValue::from("VALIDATION_ERROR"));
    }

    #[test]
    fn test_details_carry_source() {
        let details = IntentError::Structural("bad counts".to_owned()).details();
        assert_eq!(details.get("source"), Some(&JsonValue::from("analysis")));
        assert!(details.contains_key("message"));
    }
}
