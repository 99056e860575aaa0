//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure leaves the
//! HTTP boundary as `{ "error": <message> }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{StoreError, USER_NOT_FOUND_MESSAGE};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Any failure raised by the user store, reported verbatim
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// The 404 returned by single-user lookups.
    pub fn user_not_found() -> Self {
        Self::NotFound(USER_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match &self {
            AppError::Store(e) => tracing::error!(error = %e, "Store error"),
            AppError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound(_) => {}
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
