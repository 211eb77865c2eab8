//! Wire and storage types for the todo service.

use serde::{Deserialize, Serialize};

/// A stored todo record. `id` is assigned by the server and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub completed: bool,
}

/// Request body accepted by POST and PUT.
///
/// Every field is optional at the JSON level so that a missing `task` or
/// `id` is reported as a bad request by the handler instead of a generic
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of the health check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Api health is OK".to_string(),
        }
    }
}
