//! Application error type and its HTTP rendering.
//!
//! Every handler returns `Result<_, AppError>`, so this module is the single
//! place where failures are logged and turned into responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Error envelope returned for server-side failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error code with a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body is missing a required field or cannot be read.
    #[error("Validation error: {message}")]
    Validation { message: String, details: Value },

    /// The store (or anything else below the handlers) failed.
    #[error("Internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts the error into the public part of the error envelope.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, .. } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
            },
            AppError::Internal { message, .. } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Client errors carry no body at all.
            AppError::Validation { message, details } => {
                tracing::debug!(%message, %details, "Rejected request");
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed");
                let body = ErrorBody {
                    error: self.to_error_info(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!({ "reason": e.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
