//! Error handling for the Fabtrack client
//!
//! Every failure path here returns control to the user with an actionable
//! next step: validation errors stay local to the form, network errors are
//! surfaced and leave the payload under construction intact.

use serde::Deserialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Backend errors
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // Submission guard
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Error envelope returned by the backend
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl AppError {
    /// Decode a non-success response body into an API error
    ///
    /// Falls back to the raw body (or a generic message) when the backend
    /// did not send its usual envelope.
    pub(crate) fn from_api_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(envelope) => AppError::Api {
                status,
                code: envelope.error.code,
                message: envelope.error.message,
            },
            Err(_) => AppError::Api {
                status,
                code: "UNKNOWN".to_string(),
                message: if body.trim().is_empty() {
                    "The server reported an error".to_string()
                } else {
                    body.trim().to_string()
                },
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_else(|| "request".to_string());
        AppError::Validation {
            field,
            message: errors.to_string(),
        }
    }
}

/// Result type alias for the client
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_envelope() {
        let body = r#"{"error":{"code":"DUPLICATE_ENTRY","message":"Slip number already exists"}}"#;
        match AppError::from_api_response(409, body) {
            AppError::Api { status, code, message } => {
                assert_eq!(status, 409);
                assert_eq!(code, "DUPLICATE_ENTRY");
                assert_eq!(message, "Slip number already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_opaque_body_falls_back_to_generic_message() {
        match AppError::from_api_response(502, "") {
            AppError::Api { code, message, .. } => {
                assert_eq!(code, "UNKNOWN");
                assert_eq!(message, "The server reported an error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_envelope_body_is_preserved() {
        match AppError::from_api_response(500, "Bad Gateway\n") {
            AppError::Api { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
