//! Identifier generation for new todos.
//!
//! The store only needs "give me a fresh, unique string"; keeping that
//! behind a trait lets tests swap the random generator for a
//! predictable one.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique, non-empty todo identifiers.
pub trait IdGenerator: Send + Sync + 'static {
    fn new_id(&self) -> String;
}

/// Random v4 UUIDs in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `todo-1`, `todo-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("todo-{n}")
    }
}
