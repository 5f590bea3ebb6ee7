//! Error handling for the farmer gateway
//!
//! Provides a consistent JSON error envelope for every failure path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Declared by the farmer lookup contract. The gateway itself never
    /// constructs this; only a farmer-records backing can raise it when an
    /// id lookup misses.
    #[error("Farmer {0} not found")]
    FarmerNotFound(i32),

    /// A call to the remote problem service failed (transport error or a
    /// non-success downstream status).
    #[error("Problem service error: {0}")]
    ProblemService(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::FarmerNotFound(_) => (StatusCode::NOT_FOUND, "FARMER_NOT_FOUND"),
            AppError::ProblemService(_) => (StatusCode::BAD_GATEWAY, "PROBLEM_SERVICE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
