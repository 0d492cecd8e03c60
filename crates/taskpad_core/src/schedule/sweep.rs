//! Deferred bulk-removal scheduling.
//!
//! # Responsibility
//! - Hold the snapshot of a scheduled clear-completed sweep until it is
//!   due, cancelled or replaced.
//! - Expose per-item stagger offsets so a renderer can drive the removal
//!   animation from data.
//!
//! # Invariants
//! - At most one sweep is pending at a time; scheduling again replaces
//!   the previous snapshot.
//! - The snapshot is taken at schedule time and never recomputed: the
//!   sweep removes exactly these ids, regardless of later state changes.

use crate::model::task::TaskId;

/// Per-item delay between removal animations, in milliseconds.
pub const SWEEP_STAGGER_MS: i64 = 100;

/// Fixed duration of one removal animation, in milliseconds.
pub const SWEEP_ANIMATION_MS: i64 = 1200;

/// A scheduled bulk removal, frozen at schedule time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSweep {
    /// Ids of the tasks that were completed when the sweep was scheduled.
    pub task_ids: Vec<TaskId>,
    /// Instant the sweep was scheduled, epoch milliseconds.
    pub scheduled_at_ms: i64,
    /// Instant the deferred mutation becomes due, epoch milliseconds.
    pub due_at_ms: i64,
}

impl PendingSweep {
    /// Animation start offsets relative to `scheduled_at_ms`, one per task
    /// in snapshot order.
    pub fn stagger_delays(&self) -> impl Iterator<Item = (TaskId, i64)> + '_ {
        self.task_ids
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index as i64 * SWEEP_STAGGER_MS))
    }
}

/// Single-slot scheduler for the deferred clear-completed mutation.
///
/// The due time covers every staggered animation plus the fixed animation
/// duration: `count * SWEEP_STAGGER_MS + SWEEP_ANIMATION_MS` after
/// scheduling.
#[derive(Debug, Default)]
pub struct SweepScheduler {
    pending: Option<PendingSweep>,
}

impl SweepScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sweep over the given snapshot, replacing any pending one.
    pub fn schedule(&mut self, task_ids: Vec<TaskId>, now_ms: i64) -> &PendingSweep {
        let due_at_ms = now_ms + task_ids.len() as i64 * SWEEP_STAGGER_MS + SWEEP_ANIMATION_MS;
        self.pending.insert(PendingSweep {
            task_ids,
            scheduled_at_ms: now_ms,
            due_at_ms,
        })
    }

    /// Returns the pending sweep, if any, without consuming it.
    pub fn pending(&self) -> Option<&PendingSweep> {
        self.pending.as_ref()
    }

    /// Consumes and returns the pending sweep once its due time has
    /// passed. Returns `None` while the sweep is still in flight.
    pub fn take_due(&mut self, now_ms: i64) -> Option<PendingSweep> {
        if self.pending.as_ref()?.due_at_ms > now_ms {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending sweep without running it.
    pub fn cancel(&mut self) -> Option<PendingSweep> {
        self.pending.take()
    }
}
