//! Error handling for the dashboard server.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use flowdeck_core::{AuthError, FlowError};
use serde::Serialize;
use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login rejected.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Missing, forged or expired session cookie.
    #[error("Invalid token")]
    InvalidToken,

    /// A flow run is already in flight.
    #[error("{0}")]
    FlowBusy(String),

    /// The flow did not finish in time.
    #[error("{0}")]
    FlowTimeout(String),

    /// The flow trigger failed.
    #[error("{0}")]
    FlowFailed(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            AppError::FlowBusy(_) => (StatusCode::CONFLICT, "FLOW_BUSY"),
            AppError::FlowTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "FLOW_TIMEOUT"),
            AppError::FlowFailed(_) => (StatusCode::BAD_GATEWAY, "FLOW_FAILED"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if let AppError::Internal(msg) = &self {
            tracing::error!(error = %msg, "request failed");
        }

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message: self.to_string(),
        };

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(body)).into_response()
        } else {
            (status, Json(body)).into_response()
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::InvalidToken => AppError::InvalidToken,
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::AlreadyRunning => AppError::FlowBusy(err.to_string()),
            FlowError::TimedOut(_) => AppError::FlowTimeout(err.to_string()),
            FlowError::Failed(_) => AppError::FlowFailed(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
