//! Wire DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined
//! independently, so the client does not pull in axum or tokio. The
//! integration test against a live server catches any drift between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo. The server assigns the id,
/// timestamp and `completed = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for updating an existing todo. Completion is the only
/// field the server lets a client change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body the server returns alongside any 4xx/5xx status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
