//! Response helpers shared by the HTTP handlers

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::storage::codec::to_pretty_json;
use crate::storage::StoreError;

/// JSON body rendered with the same pretty, key-sorted codec as the files
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_pretty_json(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                bytes,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to encode response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Error body: `{"error": true, "reason": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub reason: String,
}

/// Errors a handler can answer with
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input from the caller (400)
    BadRequest(String),
    /// No such chat (404)
    NotFound(String),
    /// Storage failure (500)
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn reason(&self) -> &str {
        match self {
            ApiError::BadRequest(reason)
            | ApiError::NotFound(reason)
            | ApiError::Internal(reason) => reason,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => ApiError::NotFound("Chat not found".to_string()),
            other => {
                tracing::error!("Storage failure: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: true,
            reason: self.reason().to_string(),
        };
        (status, PrettyJson(body)).into_response()
    }
}
