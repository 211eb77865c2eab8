//! In-memory todo service over HTTP.
//!
//! # Overview
//! `TodoStore` holds every record behind a single lock; the axum router in
//! [`app`] maps `/` to a health check and `/todo/...` to store operations.
//!
//! # Design
//! - The store is an explicit handle passed in as router state, so tests
//!   build isolated instances.
//! - Id generation sits behind [`IdGenerator`].
//! - Errors leave handlers as [`ApiError`] and render as plain text.

pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod routes;
pub mod store;

use axum::{
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::ApiError;
pub use id::{IdGenerator, SequentialIds, UuidGenerator};
pub use model::{HealthResponse, Todo, TodoPayload};
pub use store::{StoreError, TodoStore};

pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/", any(routes::health))
        .route("/todo", any(routes::redirect_to_collection))
        .route(
            "/todo/",
            get(routes::list_todos)
                .post(routes::create_todo)
                .put(routes::update_todo)
                .delete(routes::delete_without_id)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/todo/{*id}",
            get(routes::get_todo)
                .post(routes::create_todo)
                .put(routes::update_todo_at)
                .delete(routes::delete_todo)
                .fallback(routes::method_not_allowed),
        )
        // Anything else is answered like the root path.
        .fallback(routes::health)
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
