//! Domain DTOs for the todo API.
//!
//! # Design
//! These mirror the server's wire schema but are defined independently so
//! the client carries no axum or tokio dependency. The integration test
//! catches schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for replacing an existing todo. The server overwrites
/// both `task` and `completed`; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl From<Todo> for UpdateTodo {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            task: todo.task,
            completed: todo.completed,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
