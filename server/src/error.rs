//! Request-level errors and their HTTP rendering.
//!
//! Every failure a handler can hit is folded into one of three kinds.
//! They render as the matching status with a plain-text body; there is no
//! structured error payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Unreadable or malformed body, or a missing required field.
    #[error("{0}")]
    BadRequest(String),

    /// No record matched, or nothing to list.
    #[error("{0}")]
    NotFound(String),

    /// Unsupported verb on a todo path.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::not_found("Todo not found"),
            StoreError::InvalidInput(msg) => Self::bad_request(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // String bodies get text/plain; charset=utf-8 from axum.
        (self.status_code(), self.to_string()).into_response()
    }
}
