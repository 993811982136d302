//! Error handling for elecdex.
//!
//! This module provides:
//! - [`ElecError`]: The main error enum for all elecdex operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Why the one-time catalog load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailureKind {
    /// Nothing exists at the resolved location.
    NotFound,
    /// Reading the file or talking to the server failed.
    Transport,
    /// The server answered with a non-success status.
    HttpStatus(u16),
    /// The document was read but is not `{ "items": [...] }`.
    Malformed,
}

/// Main error type for elecdex operations.
#[derive(Error, Debug)]
pub enum ElecError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load electronics data from {location}: {reason}")]
    LoadFailure {
        location: String,
        kind: LoadFailureKind,
        reason: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Interactive terminal required: {0}")]
    NotInteractive(String),
}

impl ElecError {
    pub(crate) fn load_failure(
        location: impl Into<String>,
        kind: LoadFailureKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::LoadFailure {
            location: location.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::LoadFailure { kind, .. } => match kind {
                LoadFailureKind::NotFound => ErrorCode::DataNotFound,
                LoadFailureKind::Transport => ErrorCode::DataLoadFailed,
                LoadFailureKind::HttpStatus(_) => ErrorCode::NetworkHttpStatus,
                LoadFailureKind::Malformed => ErrorCode::DataMalformed,
            },
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::NotInteractive(_) => ErrorCode::TerminalRequired,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::LoadFailure { location, kind, .. } => {
                Some(serde_json::json!({ "location": location, "kind": kind }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_elec_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "DATA_LOAD_FAILED")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "data", "config", "network")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an `ElecError`.
    #[must_use]
    pub fn from_elec_error(err: &ElecError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&ElecError> for StructuredError {
    fn from(err: &ElecError) -> Self {
        Self::from_elec_error(err)
    }
}

/// Result type alias using `ElecError`.
pub type Result<T> = std::result::Result<T, ElecError>;
