//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `InvalidInput` get dedicated variants because callers
//! react to them differently: re-check the id, or fix the payload and
//! resubmit. Every other non-success response lands in `HttpError` with the
//! raw status code and body for debugging.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 400. Carries the server's `error` message.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
