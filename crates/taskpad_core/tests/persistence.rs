use chrono::{DateTime, Utc};
use rusqlite::Connection;
use taskpad_core::db::migrations::latest_version;
use taskpad_core::db::{open_db, open_db_in_memory};
use taskpad_core::{
    RepoError, SqliteTaskRepository, Task, TaskRepository, TASKS_DOCUMENT_KEY,
};

fn sample_task(id: i64, text: &str, completed: bool) -> Task {
    let mut task = Task::new(id, text, fixed_instant());
    task.completed = completed;
    task
}

fn fixed_instant() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_756_000_000_000).unwrap()
}

#[test]
fn save_load_roundtrip_preserves_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    let tasks = vec![
        sample_task(1, "Buy groceries", false),
        sample_task(2, "Pay bills", true),
        sample_task(3, "Walk the dog", false),
    ];
    repo.save(&tasks).unwrap();

    assert_eq!(repo.load().unwrap(), tasks);
}

#[test]
fn missing_document_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn corrupted_document_degrades_to_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    conn.execute(
        "INSERT INTO documents (key, value) VALUES (?1, '{not valid json');",
        [TASKS_DOCUMENT_KEY],
    )
    .unwrap();

    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn document_with_wrong_shape_degrades_to_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    conn.execute(
        "INSERT INTO documents (key, value) VALUES (?1, '{\"tasks\": 3}');",
        [TASKS_DOCUMENT_KEY],
    )
    .unwrap();

    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn each_save_fully_overwrites_the_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    repo.save(&[
        sample_task(1, "first", false),
        sample_task(2, "second", false),
    ])
    .unwrap();
    let replacement = vec![sample_task(3, "only survivor", true)];
    repo.save(&replacement).unwrap();

    assert_eq!(repo.load().unwrap(), replacement);

    let slot_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM documents;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(slot_count, 1);
}

#[test]
fn stored_document_uses_the_fixed_wire_field_names() {
    let task = sample_task(42, "Study for exam", false);
    let json = serde_json::to_value(vec![task]).unwrap();

    let record = &json[0];
    assert_eq!(record["id"], 42);
    assert_eq!(record["text"], "Study for exam");
    assert_eq!(record["completed"], false);

    let created_at = record["createdAt"]
        .as_str()
        .expect("createdAt must be an ISO-8601 string");
    let parsed: DateTime<Utc> = created_at.parse().unwrap();
    assert_eq!(parsed, fixed_instant());
}

#[test]
fn collection_survives_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.db");

    let tasks = vec![sample_task(7, "Plan vacation", false)];
    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteTaskRepository::try_new(&conn).unwrap();
        repo.save(&tasks).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    assert_eq!(repo.load().unwrap(), tasks);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_documents_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("documents"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE documents (key TEXT PRIMARY KEY NOT NULL);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "documents",
            column: "value"
        })
    ));
}
