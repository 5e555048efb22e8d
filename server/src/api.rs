//! JSON handlers for `/todos`.
//!
//! Bodies are read as raw bytes and parsed here rather than through axum's
//! `Json` extractor, so that content-type and field-type problems land in
//! the right bucket: a body that is not JSON at all is an unexpected
//! failure (500), while valid JSON with a missing or mistyped field is a
//! validation failure (400).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::store::{Todo, TodoId, TodoPatch, TodoStore};

pub type SharedStore = Arc<TodoStore>;

/// Validated payload for `POST /todos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
}

impl CreateTodo {
    /// Requires a non-empty string `title`. Other fields are ignored.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        match body.get("title").and_then(Value::as_str) {
            Some(title) if !title.is_empty() => Ok(Self {
                title: title.to_string(),
            }),
            _ => Err(ApiError::InvalidInput("Title is required".to_string())),
        }
    }
}

/// Validated payload for `PUT /todos/{id}`. Only `completed` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTodo {
    pub completed: bool,
}

impl UpdateTodo {
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        match body.get("completed").and_then(Value::as_bool) {
            Some(completed) => Ok(Self { completed }),
            None => Err(ApiError::InvalidInput(
                "Completed status must be a boolean".to_string(),
            )),
        }
    }
}

impl From<UpdateTodo> for TodoPatch {
    fn from(input: UpdateTodo) -> Self {
        TodoPatch {
            completed: Some(input.completed),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
}

fn parse_body(bytes: &Bytes) -> Result<Value, ApiError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// An id that does not parse cannot name a stored todo.
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let todos = store.list().await;
    tracing::debug!(count = todos.len(), "GET /todos");
    Json(todos)
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = CreateTodo::from_body(&parse_body(&body)?)?;
    let todo = store.create(input.title).await;
    tracing::info!(id = %todo.id, "POST /todos");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    tracing::debug!(id = %id, "GET /todos/{{id}}");
    let id = parse_id(&id)?;
    store.get(id).await.map(Json).ok_or(ApiError::NotFound)
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input = UpdateTodo::from_body(&parse_body(&body)?)?;
    tracing::info!(id = %id, completed = input.completed, "PUT /todos/{{id}}");
    let id = parse_id(&id)?;
    store
        .update(id, input.into())
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    tracing::info!(id = %id, "DELETE /todos/{{id}}");
    let id = parse_id(&id)?;
    if !store.delete(id).await {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}
