//! Error type for the HTTP API layer.
//!
//! # Design
//! The store never fails; it reports absence with `Option`/`bool`. Handlers
//! turn that absence, along with request validation failures, into an
//! `ApiError`, and `IntoResponse` maps each variant to a status code and a
//! JSON `{"error": ...}` body. `Unexpected` keeps its detail for the log and
//! shows the client only a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request field was missing or had the wrong type.
    #[error("{0}")]
    InvalidInput(String),

    /// The referenced todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// Anything else that went wrong while handling the request.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::Unexpected(detail) => {
                tracing::error!(error = %detail, "request failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Unexpected(format!("malformed JSON body: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_status_codes() {
        assert_eq!(ApiError::InvalidInput("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unexpected("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_input_message_is_passed_through() {
        assert_eq!(
            ApiError::InvalidInput("Title is required".into()).to_string(),
            "Title is required"
        );
        assert_eq!(ApiError::NotFound.to_string(), "Todo not found");
    }

    #[test]
    fn json_errors_become_unexpected() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Unexpected(_)));
    }
}
