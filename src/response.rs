//! Response envelope and API error taxonomy.
//!
//! Every endpoint answers with the `{rc, msg, ...}` convention: `rc: 0` for
//! success, `rc: 1` for failure. All failures funnel through [`ApiError`] so
//! the status-code mapping lives in one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure body: `{rc: 1, msg}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub rc: u8,
    pub msg: String,
}

/// Success body for endpoints that only report a message: `{rc: 0, msg}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub rc: u8,
    pub msg: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { rc: 0, msg: msg.into() }
    }
}

/// API errors
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request input (400).
    Validation(String),
    /// No usable `Authorization: Bearer` header (400).
    MissingToken,
    /// Token failed signature or expiry checks (403).
    InvalidToken,
    /// Login against an unknown username (404).
    UserNotFound(String),
    /// Wrong password (401).
    InvalidCredentials,
    /// Registration username collision (409).
    UsernameTaken(String),
    /// Registration email collision (409).
    EmailTaken(String),
    /// Movie title collision (409).
    MovieExists(String),
    /// Database or other unexpected failure (500).
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MissingToken => (
                StatusCode::BAD_REQUEST,
                "Missing token in request".to_string(),
            ),
            ApiError::InvalidToken => (
                StatusCode::FORBIDDEN,
                "Invalid or expired token".to_string(),
            ),
            ApiError::UserNotFound(username) => (
                StatusCode::NOT_FOUND,
                format!("User {} not found", username),
            ),
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiError::UsernameTaken(username) => (
                StatusCode::CONFLICT,
                format!("User {} already exists", username),
            ),
            ApiError::EmailTaken(email) => (
                StatusCode::CONFLICT,
                format!("Email {} already in use", email),
            ),
            ApiError::MovieExists(title) => (
                StatusCode::CONFLICT,
                format!("Movie with title {} already present", title),
            ),
            ApiError::Internal(err) => {
                // Log the detail, answer with a generic message.
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { rc: 1, msg: message })).into_response()
    }
}
