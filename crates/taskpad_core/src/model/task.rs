//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of the system.
//! - Keep the wire shape stable for the stored JSON document.
//!
//! # Invariants
//! - `id` is unique among concurrently existing tasks and never reused
//!   while the task lives.
//! - `text` is never empty once created; the store trims and validates
//!   before construction.
//! - `created_at` is set once and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a task.
///
/// Derived from epoch milliseconds at creation and bumped past the last
/// issued id, so ids stay unique and roughly creation-ordered. Kept as a
/// type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// A user-created to-do item.
///
/// Serialized field names are fixed by the persisted document layout:
/// `id`, `text`, `completed`, `createdAt` (RFC 3339 timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in its initial state.
    ///
    /// Callers are responsible for id uniqueness and for passing trimmed,
    /// non-empty text; the store is the only production caller.
    pub fn new(id: TaskId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns whether this task counts toward the active view.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
