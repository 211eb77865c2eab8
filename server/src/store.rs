//! In-memory todo store.
//!
//! # Design
//! Records live in a `Vec` so list order is insertion order and updates
//! keep their slot. One `tokio::sync::Mutex` guards the whole collection;
//! every operation, reads included, holds it for its full duration.
//! Lookups are linear scans.
//!
//! `TodoStore` is a cheap `Arc` handle: construct it once and clone it
//! into whatever needs access.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::id::{IdGenerator, UuidGenerator};
use crate::model::Todo;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record matched, or the collection is empty on list.
    #[error("no todo matches the request")]
    NotFound,

    /// The record would break a store invariant (empty task).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

#[derive(Clone)]
pub struct TodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore").finish_non_exhaustive()
    }
}

impl TodoStore {
    /// Empty store issuing random UUIDs.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator(ids: impl IdGenerator) -> Self {
        Self {
            todos: Arc::new(Mutex::new(Vec::new())),
            ids: Arc::new(ids),
        }
    }

    /// All records in insertion order. An empty store is `NotFound`.
    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.lock().await;
        if todos.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(todos.clone())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Todo, StoreError> {
        let todos = self.todos.lock().await;
        todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new record with a freshly generated id.
    pub async fn insert(&self, task: String, completed: bool) -> Result<Todo, StoreError> {
        if task.is_empty() {
            return Err(StoreError::InvalidInput("task must not be empty"));
        }
        let mut todos = self.todos.lock().await;
        let todo = Todo {
            id: self.ids.new_id(),
            task,
            completed,
        };
        todos.push(todo.clone());
        Ok(todo)
    }

    /// Overwrite `task` and `completed` of the matching record in place.
    pub async fn update_by_id(
        &self,
        id: &str,
        task: String,
        completed: bool,
    ) -> Result<Todo, StoreError> {
        if task.is_empty() {
            return Err(StoreError::InvalidInput("task must not be empty"));
        }
        let mut todos = self.todos.lock().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        todo.task = task;
        todo.completed = completed;
        Ok(todo.clone())
    }

    /// Remove the matching record; the rest keep their relative order.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().await;
        let pos = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        todos.remove(pos);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.todos.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::id::SequentialIds;

    fn store() -> TodoStore {
        TodoStore::with_id_generator(SequentialIds::new())
    }

    #[tokio::test]
    async fn list_on_empty_store_is_not_found() {
        assert_eq!(store().list_all().await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn insert_assigns_ids_in_order() {
        let store = store();
        let a = store.insert("a".to_string(), false).await.unwrap();
        let b = store.insert("b".to_string(), true).await.unwrap();
        assert_eq!(a.id, "todo-1");
        assert_eq!(b.id, "todo-2");
        assert!(b.completed);

        let all = store.list_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn insert_rejects_empty_task() {
        let store = store();
        let err = store.insert(String::new(), false).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn get_by_id_finds_record() {
        let store = store();
        let created = store.insert("read me".to_string(), false).await.unwrap();
        assert_eq!(store.get_by_id(&created.id).await.unwrap(), created);
        assert_eq!(store.get_by_id("missing").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn update_keeps_slot_and_id() {
        let store = store();
        store.insert("first".to_string(), false).await.unwrap();
        let second = store.insert("second".to_string(), false).await.unwrap();
        store.insert("third".to_string(), false).await.unwrap();

        let updated = store
            .update_by_id(&second.id, "changed".to_string(), true)
            .await
            .unwrap();
        assert_eq!(updated.id, second.id);
        assert_eq!(updated.task, "changed");
        assert!(updated.completed);

        let tasks: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();
        assert_eq!(tasks, ["first", "changed", "third"]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = store();
        store.insert("x".to_string(), false).await.unwrap();
        let err = store
            .update_by_id("nope", "y".to_string(), false)
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn update_rejects_empty_task() {
        let store = store();
        let todo = store.insert("x".to_string(), false).await.unwrap();
        let err = store
            .update_by_id(&todo.id, String::new(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(store.get_by_id(&todo.id).await.unwrap().task, "x");
    }

    #[tokio::test]
    async fn delete_preserves_order_and_is_not_idempotent() {
        let store = store();
        let a = store.insert("a".to_string(), false).await.unwrap();
        let b = store.insert("b".to_string(), false).await.unwrap();
        let c = store.insert("c".to_string(), false).await.unwrap();

        store.delete_by_id(&b.id).await.unwrap();
        assert_eq!(store.list_all().await.unwrap(), vec![a, c]);
        assert_eq!(store.delete_by_id(&b.id).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = store();
        let other = store.clone();
        store.insert("shared".to_string(), false).await.unwrap();
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_keep_every_record() {
        let store = TodoStore::new();
        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(format!("task {i}"), false).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 64);
        let ids: HashSet<_> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 64);
    }
}
