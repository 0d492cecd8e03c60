//! Domain models shared across store, persistence and view layers.

pub mod task;
