//! Persistence contracts for the task collection.

pub mod task_repo;

pub use task_repo::{
    RepoError, RepoResult, SqliteTaskRepository, TaskRepository, TASKS_DOCUMENT_KEY,
};
