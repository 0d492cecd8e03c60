//! View filtering over the task collection.
//!
//! # Responsibility
//! - Derive the all/active/completed view subsets without mutating the
//!   source collection.
//!
//! # Invariants
//! - `apply` preserves source order and never clones tasks.
//! - Active and completed subsets partition the full collection.

use crate::model::task::Task;

/// Current view selector. Not persisted; every session starts at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether a task belongs to this view.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Returns the ordered subsequence of `tasks` visible under `filter`.
pub fn apply(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
