//! # API Errors
//!
//! Every failure is terminal for its request and is turned into a status
//! code plus a fixed `{"message": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::student::StoreError;

/// Body used for every message-only response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Student not found")]
    NotFound,

    #[error("Invalid input")]
    InvalidInput,

    /// No route matched, including an `{id}` segment that is not an integer
    #[error("Not found")]
    NoRoute,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::NoRoute => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NoRoute => self.status_code().into_response(),
            _ => (self.status_code(), Json(MessageResponse::new(self.to_string()))).into_response(),
        }
    }
}

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;
