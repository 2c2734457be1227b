//! Task record.
//!
//! # Responsibility
//! - Define the canonical `{id, text, completed}` record.
//! - Provide the text normalization used for duplicate detection.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes.
//! - Two tasks are equal iff their ids are equal.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of a task record.
pub type TaskId = Uuid;

/// One to-do item.
///
/// Serialized as `{"id": "...", "text": "...", "completed": false}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open task with a freshly generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an open task with a caller-provided id.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns whether `text` names the same task as this one for duplicate
    /// detection (trimmed, case-insensitive).
    pub fn has_same_text(&self, text: &str) -> bool {
        normalize_text(&self.text) == normalize_text(text)
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Normalizes task text for duplicate comparison.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}
