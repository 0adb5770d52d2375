//! # API Errors
//!
//! Maps domain failures onto HTTP status codes and the shared error
//! envelope. Validation failures and malformed request input are client
//! errors; only storage faults surface as 500s, and only those are logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::ErrorResponse;
use crate::observability::Logger;
use crate::registry::errors::RegistryError;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be parsed as the expected JSON shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The query string could not be parsed as the expected shape.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// A registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ApiError {
    /// Status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::DisallowedFields { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            Logger::error(
                "REQUEST_FAILED",
                &[("error", message.as_str()), ("status", status.as_str())],
            );
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
