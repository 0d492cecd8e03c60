//! Confirmation gate for destructive operations.
//!
//! # Responsibility
//! - Put a blocking yes/no decision in front of task deletion and bulk
//!   clearing, answered by whoever embeds the core.
//!
//! # Invariants
//! - A declined gate aborts the operation with no state change; declines
//!   are normal negative outcomes, never errors.

use crate::model::task::TaskId;

/// The destructive action awaiting a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRequest<'a> {
    /// Remove a single task.
    DeleteTask { id: TaskId, text: &'a str },
    /// Remove every completed task; `count` names how many.
    ClearCompleted { count: usize },
}

/// Blocking yes/no prompt supplied by the presentation layer.
pub trait ConfirmationGate {
    fn confirm(&self, request: &ConfirmRequest<'_>) -> bool;
}

/// Gate that approves everything. For embeddings without a prompt
/// surface, and for tests of the confirmed path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _request: &ConfirmRequest<'_>) -> bool {
        true
    }
}
