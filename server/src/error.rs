//! Unified error handling
//!
//! [`AppError`] maps domain and auth failures onto HTTP responses with the
//! same `{ success, message }` envelope the client expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use order_sync::ApiResponse;
use tracing::error;

use crate::domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    /// Missing or unknown token (401)
    Unauthorized,

    #[error("Permission denied: {0}")]
    /// Authenticated but lacking the role (403)
    Forbidden(String),

    #[error("Resource not found: {0}")]
    /// Unknown collection or record (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// Bad input or an order that is not a permutation (400)
    Validation(String),

    #[error("Database error: {0}")]
    /// Storage failure (500)
    Database(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::InvalidOrder(msg) | DomainError::InvalidInput(msg) => AppError::Validation(msg),
            DomainError::Storage(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Unauthorized => "Please login first".to_string(),
            AppError::Forbidden(msg) | AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
