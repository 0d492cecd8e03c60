//! Canonical task collection ownership and mutation.

pub mod gate;
pub mod task_store;

pub use gate::{AutoConfirm, ConfirmRequest, ConfirmationGate};
pub use task_store::{ClearOutcome, TaskStore, CLEAR_CONFIRM_THRESHOLD};
