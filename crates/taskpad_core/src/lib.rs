//! Core domain logic for Taskpad.
//! This crate is the single source of truth for business invariants; the
//! presentation layer renders from it and feeds user intent back in.

pub mod classify;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod session;
pub mod store;
pub mod suggest;

pub use classify::{classify, icon_for, Category, DEFAULT_ICON};
pub use filter::Filter;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository, TASKS_DOCUMENT_KEY};
pub use schedule::{Clock, ManualClock, PendingSweep, SystemClock, SWEEP_ANIMATION_MS, SWEEP_STAGGER_MS};
pub use session::TaskSession;
pub use store::{
    AutoConfirm, ClearOutcome, ConfirmRequest, ConfirmationGate, TaskStore,
    CLEAR_CONFIRM_THRESHOLD,
};
pub use suggest::{Direction, SuggestionEngine, DEFAULT_CORPUS, MAX_SUGGESTIONS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
