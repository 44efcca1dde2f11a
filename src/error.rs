use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Failures surfaced by the registry and its HTTP handlers.
///
/// Status contract: malformed input and unknown URLs are the caller's fault
/// (400), a disabled short URL answers 404, an exhausted key pool is a
/// server fault (500).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Disabled { message: String, details: Value },
    #[error("{message}")]
    KeyPoolExhausted { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn disabled(message: impl Into<String>, details: Value) -> Self {
        Self::Disabled {
            message: message.into(),
            details,
        }
    }
    pub fn pool_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::KeyPoolExhausted {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::BAD_REQUEST, "not_found", message, details)
            }
            AppError::Disabled { message, details } => {
                (StatusCode::NOT_FOUND, "url_disabled", message, details)
            }
            AppError::KeyPoolExhausted { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "key_pool_exhausted",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
