//! HTTP handlers for the health check and the `/todo/` resource.
//!
//! Bodies are taken as raw bytes and decoded here rather than through
//! axum's `Json` extractor, so every unreadable or malformed body comes
//! back as a plain 400 instead of 415/422.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::model::{HealthResponse, Todo, TodoPayload};
use crate::store::{StoreError, TodoStore};

const ID_REQUIRED: &str = "Todo ID is required";

pub async fn health(method: Method, uri: Uri) -> Json<HealthResponse> {
    debug!(%method, path = uri.path(), "health check");
    Json(HealthResponse::ok())
}

pub async fn list_todos(State(store): State<TodoStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    debug!("list todos");
    match store.list_all().await {
        Ok(todos) => Ok(Json(todos)),
        Err(StoreError::NotFound) => Err(ApiError::not_found("No todos found")),
        Err(e) => Err(e.into()),
    }
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw_id)?;
    debug!(id, "get todo");
    Ok(Json(store.get_by_id(id).await?))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let payload = parse_payload(body)?;
    let todo = store.insert(payload.task, payload.completed).await?;
    info!(id = %todo.id, "created todo");
    Ok(Json(todo))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    update(&store, None, body).await
}

/// An undecodable suffix only matters when the body carries no id.
pub async fn update_todo_at(
    State(store): State<TodoStore>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let path_id = path.ok().map(|Path(raw_id)| raw_id);
    update(&store, Some(path_id.as_deref().unwrap_or("")), body).await
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    store.delete_by_id(id).await?;
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_without_id() -> ApiError {
    warn!("delete without an id");
    ApiError::bad_request(ID_REQUIRED)
}

/// `/todo` without the trailing slash points clients at the collection.
pub async fn redirect_to_collection() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/todo/")])
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    warn!(%method, path = uri.path(), "method not allowed");
    ApiError::MethodNotAllowed
}

/// The body id wins and the path suffix is then ignored; the path id is
/// only consulted when the body has none.
async fn update(
    store: &TodoStore,
    path_id: Option<&str>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let payload = parse_payload(body)?;

    let id = match (payload.id.filter(|id| !id.is_empty()), path_id) {
        (Some(id), _) => id,
        (None, Some(path_id)) => parse_id(path_id)?.to_string(),
        (None, None) => {
            warn!("update without an id");
            return Err(ApiError::bad_request(ID_REQUIRED));
        }
    };

    let todo = store
        .update_by_id(&id, payload.task, payload.completed)
        .await?;
    info!(id = %todo.id, "updated todo");
    Ok(Json(todo))
}

/// Route ids are taken verbatim, but a blank one is never a valid id.
fn parse_id(raw: &str) -> Result<&str, ApiError> {
    if raw.trim().is_empty() {
        warn!("blank todo id in path");
        return Err(ApiError::bad_request(ID_REQUIRED));
    }
    Ok(raw)
}

fn parse_payload(body: Result<Bytes, BytesRejection>) -> Result<TodoPayload, ApiError> {
    let bytes = body.map_err(|e| {
        warn!(error = %e, "failed to read request body");
        ApiError::bad_request("Error reading request body")
    })?;
    let payload: TodoPayload = serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "failed to parse request body");
        ApiError::bad_request("Error parsing JSON")
    })?;
    if payload.task.is_empty() {
        warn!("request body without a task");
        return Err(ApiError::bad_request("Error parsing JSON"));
    }
    Ok(payload)
}
