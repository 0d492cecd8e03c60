//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskpad_core::db::open_db_in_memory;
use taskpad_core::{AutoConfirm, SqliteTaskRepository, SystemClock, TaskSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("taskpad_core version={}", taskpad_core::core_version());

    // In-memory round-trip to validate store wiring independently of any
    // presentation runtime.
    let conn = open_db_in_memory()?;
    let repo = SqliteTaskRepository::try_new(&conn)?;
    let mut session = TaskSession::start(repo, SystemClock)?;

    let id = session
        .create("Read a book")
        .ok_or("smoke task was rejected")?;
    session.toggle(id);
    session.clear_completed(&AutoConfirm);

    println!(
        "taskpad_core smoke tasks={} active={} pending_sweep={}",
        session.tasks().len(),
        session.active_count(),
        session.pending_sweep().is_some()
    );

    Ok(())
}
