//! In-memory todo list web service.
//!
//! # Overview
//! Serves a JSON API under `/todos` and a server-rendered page at `/`, both
//! backed by a single [`TodoStore`] that lives for the whole process.
//!
//! # Design
//! - The store is created once and passed to the router as shared state;
//!   handlers never reach it any other way.
//! - Validation lives in the handlers. The store only guarantees identity
//!   and ordering.
//! - Nothing is persisted. Restarting the process starts from an empty list.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod ui;

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

pub use api::{CreateTodo, DeleteResponse, SharedStore, UpdateTodo};
pub use error::{ApiError, ErrorBody};
pub use store::{Todo, TodoId, TodoPatch, TodoStore};

/// Router backed by a fresh, empty store.
pub fn app() -> Router {
    router(Arc::new(TodoStore::new()))
}

/// Router backed by `store`.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route(
            "/todos/{id}",
            get(api::get_todo)
                .put(api::update_todo)
                .delete(api::delete_todo),
        )
        .with_state(store)
}

/// Serve a fresh store on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `store` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
}
