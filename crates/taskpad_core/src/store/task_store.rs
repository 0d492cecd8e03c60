//! Task store: the single mutator of the task collection.
//!
//! # Responsibility
//! - Own the ordered, canonical task collection in memory.
//! - Persist the whole collection synchronously after every mutation.
//! - Defer the bulk clear-completed mutation through the sweep scheduler.
//!
//! # Invariants
//! - Insertion order is creation order; completion never re-sorts.
//! - Task text is non-empty after trimming; empty input is a silent no-op.
//! - Unknown ids are silent no-ops, defensive against stale UI references.
//! - A failed persistence write is logged and swallowed: in-memory state
//!   stays the source of truth for the session.

use log::warn;

use crate::model::task::{Task, TaskId};
use crate::repo::{RepoResult, TaskRepository};
use crate::schedule::{Clock, PendingSweep, SweepScheduler};
use crate::store::gate::{ConfirmRequest, ConfirmationGate};

/// Completed-task count above which bulk clearing asks for confirmation.
pub const CLEAR_CONFIRM_THRESHOLD: usize = 3;

/// Result of a [`TaskStore::clear_completed`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// No completed tasks existed; nothing was prompted or scheduled.
    NoOp,
    /// The confirmation gate declined; no state change.
    Declined,
    /// The sweep is scheduled; the collection mutates when it fires.
    Scheduled { count: usize, due_at_ms: i64 },
}

/// Owner of the canonical task collection.
///
/// Generic over the persistence seam and the time source so tests can run
/// against in-memory storage and a manual clock.
pub struct TaskStore<R: TaskRepository, C: Clock> {
    tasks: Vec<Task>,
    last_id: TaskId,
    repo: R,
    clock: C,
    sweeper: SweepScheduler,
}

impl<R: TaskRepository, C: Clock> TaskStore<R, C> {
    /// Loads the persisted collection and takes ownership of it.
    ///
    /// A missing or undeserializable stored document yields an empty
    /// collection (handled inside the repository); hard storage faults
    /// propagate.
    pub fn load(repo: R, clock: C) -> RepoResult<Self> {
        let tasks = repo.load()?;
        let last_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        Ok(Self {
            tasks,
            last_id,
            repo,
            clock,
            sweeper: SweepScheduler::new(),
        })
    }

    /// The full collection in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of not-yet-completed tasks.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active()).count()
    }

    /// Appends a new task from user input.
    ///
    /// Whitespace-only input is rejected as a silent no-op. Returns the
    /// new task's id otherwise.
    pub fn create(&mut self, text: &str) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.tasks.push(Task::new(id, trimmed, self.clock.now()));
        self.persist();
        Some(id)
    }

    /// Flips completion on the matching task. Unknown ids are no-ops.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.toggle();
        self.persist();
        true
    }

    /// Replaces a task's text when the new text is non-empty (after
    /// trimming) and differs from the current text; otherwise the edit is
    /// discarded and the original kept. Returns whether a change occurred.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        let trimmed = new_text.trim();
        if trimmed.is_empty() || trimmed == task.text {
            return false;
        }

        task.text = trimmed.to_string();
        self.persist();
        true
    }

    /// Removes a task after the gate approves. Unknown ids and declined
    /// gates leave the collection untouched (and an unknown id never
    /// prompts).
    pub fn delete(&mut self, id: TaskId, gate: &dyn ConfirmationGate) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };

        let request = ConfirmRequest::DeleteTask {
            id,
            text: &self.tasks[index].text,
        };
        if !gate.confirm(&request) {
            return false;
        }

        self.tasks.remove(index);
        self.persist();
        true
    }

    /// Schedules the deferred bulk removal of completed tasks.
    ///
    /// The completed id set is snapshotted now; the collection mutates
    /// only when [`run_due_sweep`](Self::run_due_sweep) fires the sweep.
    /// With more than [`CLEAR_CONFIRM_THRESHOLD`] completed tasks the gate
    /// is asked first, naming the count. Scheduling while a sweep is
    /// already pending replaces the pending snapshot.
    pub fn clear_completed(&mut self, gate: &dyn ConfirmationGate) -> ClearOutcome {
        let completed: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.completed)
            .map(|task| task.id)
            .collect();

        if completed.is_empty() {
            return ClearOutcome::NoOp;
        }

        let count = completed.len();
        if count > CLEAR_CONFIRM_THRESHOLD
            && !gate.confirm(&ConfirmRequest::ClearCompleted { count })
        {
            return ClearOutcome::Declined;
        }

        let sweep = self.sweeper.schedule(completed, self.clock.now_millis());
        ClearOutcome::Scheduled {
            count,
            due_at_ms: sweep.due_at_ms,
        }
    }

    /// Fires the pending sweep once it is due by the store's clock.
    ///
    /// Removes exactly the ids snapshotted at schedule time in one atomic
    /// update with a single persistence write, and returns the removed
    /// count. Returns 0 while nothing is due.
    pub fn run_due_sweep(&mut self) -> usize {
        let Some(sweep) = self.sweeper.take_due(self.clock.now_millis()) else {
            return 0;
        };

        let before = self.tasks.len();
        self.tasks.retain(|task| !sweep.task_ids.contains(&task.id));
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Drops the pending sweep without mutating the collection.
    pub fn cancel_sweep(&mut self) -> bool {
        self.sweeper.cancel().is_some()
    }

    /// The scheduled-but-not-yet-fired sweep, if any.
    pub fn pending_sweep(&self) -> Option<&PendingSweep> {
        self.sweeper.pending()
    }

    /// Timestamp-derived id, bumped past the last issued one so rapid
    /// creation within a millisecond stays unique.
    fn next_id(&mut self) -> TaskId {
        let id = self.clock.now_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Full-overwrite save of the collection. Write failures are surfaced
    /// as a warning, not an error: the mutation already happened in memory
    /// and must stand.
    fn persist(&self) {
        if let Err(err) = self.repo.save(&self.tasks) {
            warn!(
                "event=tasks_save module=store status=error task_count={} error={err}",
                self.tasks.len()
            );
        }
    }
}
