//! Time source and deferred-mutation scheduling.
//!
//! The store never blocks on timers: the bulk clear-completed sweep is
//! recorded here as pending work with a due time, and the embedding event
//! loop polls it through the store. Tests drive it with a manual clock.

pub mod clock;
pub mod sweep;

pub use clock::{Clock, ManualClock, SystemClock};
pub use sweep::{PendingSweep, SweepScheduler, SWEEP_ANIMATION_MS, SWEEP_STAGGER_MS};
