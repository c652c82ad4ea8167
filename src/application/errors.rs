use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::domain::shares::ShareError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    InvalidShare(#[from] ShareError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        AppError::Unexpected(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidShare(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::InvalidShare(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Unexpected(_) => "internal_error",
        }
    }

    /// Message safe to show to callers. Internal failures stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Unexpected(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Status code for page handlers, logging internal failures.
pub fn map_app_error(err: AppError) -> StatusCode {
    if let AppError::Unexpected(message) = &err {
        error!(error = %message, "unexpected error");
    }
    err.status()
}

/// JSON body returned by every failing API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `AppError` as a JSON API response.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let AppError::Unexpected(message) = &self.0 {
            error!(error = %message, "unexpected error");
        }
        let body = ErrorResponse {
            error: self.0.code().to_string(),
            message: self.0.public_message(),
        };
        (self.0.status(), Json(body)).into_response()
    }
}
