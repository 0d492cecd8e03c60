//! Task collection repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Round-trip the whole task collection to a single durable slot.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - `save` is a full overwrite of the slot, never a diff; callers may
//!   invoke it once per mutation.
//! - `load` degrades missing or undeserializable data to an empty
//!   collection instead of propagating a fatal error.

use crate::db::{migrations::latest_version, DbError};
use crate::model::task::Task;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the stored task document.
pub const TASKS_DOCUMENT_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task document persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::Encode(err) => write!(f, "failed to encode task document: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the persisted task collection.
///
/// The store calls `save` synchronously inside every mutation, so
/// implementations must tolerate high call frequency; each call replaces
/// the prior document (last writer wins).
pub trait TaskRepository {
    fn save(&self, tasks: &[Task]) -> RepoResult<()>;
    fn load(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository storing one JSON document per key.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections that skipped `open_db` bootstrap: wrong schema
    /// version, or a `documents` table that is missing or incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let document = serde_json::to_string(tasks).map_err(RepoError::Encode)?;

        self.conn.execute(
            "INSERT INTO documents (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_DOCUMENT_KEY, document],
        )?;

        Ok(())
    }

    fn load(&self) -> RepoResult<Vec<Task>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1;",
                [TASKS_DOCUMENT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(document) = stored else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&document) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "event=tasks_load module=repo status=degraded reason=undeserializable error={err}"
                );
                Ok(Vec::new())
            }
        }
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected = latest_version();
    let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual != expected {
        return Err(RepoError::UninitializedConnection {
            expected_version: expected,
            actual_version: actual,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS (
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'documents'
         );",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable("documents"));
    }

    for column in ["key", "value"] {
        let column_exists: bool = conn.query_row(
            "SELECT EXISTS (
                SELECT 1 FROM pragma_table_info('documents') WHERE name = ?1
             );",
            [column],
            |row| row.get(0),
        )?;
        if !column_exists {
            return Err(RepoError::MissingRequiredColumn {
                table: "documents",
                column,
            });
        }
    }

    Ok(())
}
