//! Error types for the wireless scanner tools.
//!
//! The two prompt flows only ever fail with [`AppError::Validation`] (caller must
//! fix the request) or [`AppError::Generation`] (the generation service failed and
//! the same request may be retried). Scanner tools add permission failures.

use std::fmt;

/// Custom error type for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Request failed schema validation: missing field, wrong type or empty value
    Validation(String),
    /// The generation service errored, timed out or returned non-conforming output
    Generation(String),
    /// The caller's session does not grant the role the tool requires
    PermissionDenied(String),
    /// Generic error for other cases
    GenericError(String),
}

impl AppError {
    /// Diagnostic error type reported at the Lambda boundary.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "InvalidInput",
            Self::Generation(_) => "GenerationError",
            Self::PermissionDenied(_) => "PermissionDenied",
            Self::GenericError(_) => "ToolError",
        }
    }

    /// Whether retrying the same request can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Generation(msg) => write!(f, "Generation error: {msg}"),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {msg}"),
            Self::GenericError(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::GenericError(format!("{error:#}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Generation(format!("request timed out: {error}"))
        } else {
            Self::Generation(error.to_string())
        }
    }
}
