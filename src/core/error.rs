use crate::services::ServiceError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Body returned with every error response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    /// Canonical reason phrase of `status`
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => Self::not_found(message),

            ServiceError::CreationFailed(source) => {
                error!(error = %source, "Gift card creation failed");
                Self::internal_server_error("Failed to create gift card")
            }

            ServiceError::InvalidId(_)
            | ServiceError::InvalidFilter(_)
            | ServiceError::InvalidField(_)
            | ServiceError::Validation(_) => Self::bad_request(err.to_string()),

            ServiceError::Store(source) => {
                error!(error = %source, "Store error");
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        Self::bad_request(err.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        Self::bad_request(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            status: self.status.as_u16(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
