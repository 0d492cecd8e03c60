//! Injectable time source.
//!
//! # Responsibility
//! - Give the store one seam for "now", for both task timestamps and
//!   sweep due-time checks.
//!
//! # Invariants
//! - `now_millis` is consistent with `now` (same instant, millisecond
//!   precision).

use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Time source abstraction so deferred mutations are testable without
/// real sleeps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall-clock time source for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for deterministic tests.
///
/// Single-threaded by design, matching the cooperative event-loop model
/// of the embedding application.
#[derive(Debug)]
pub struct ManualClock {
    millis: Cell<i64>,
}

impl ManualClock {
    /// Creates a clock frozen at the given epoch-millisecond instant.
    pub fn new(start_millis: i64) -> Self {
        Self {
            millis: Cell::new(start_millis),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta_millis: i64) {
        self.millis.set(self.millis.get() + delta_millis);
    }

    /// Jumps the clock to an absolute instant.
    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.get()).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
