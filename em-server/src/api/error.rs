//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use em_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "CONFLICT", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Identifier conflict on registration (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or invalid credentials/token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth service errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::AlreadyExists { identifier, .. } => ApiError::Conflict {
                message: format!("User already exists: {identifier}"),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Invalid credentials".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Unauthenticated { .. }
            | AuthError::InvalidToken { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ApiError::Unauthorized {
                message: "Unauthenticated".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            // Don't expose hashing/signing internals to clients
            e @ (AuthError::JwtEncode { .. } | AuthError::Hash { .. }) => {
                log::error!("Auth internal error: {}", e);
                ApiError::Internal {
                    message: "Authentication operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
