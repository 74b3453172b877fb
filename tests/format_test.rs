//! Tests pinning the on-disk task file format: field names, the `"open"`
//! status label, and null handling for optional fields.

use serde_json::{Value, json};
use tempfile::tempdir;
use todo_cli::models::{Task, TaskStatus};
use todo_cli::storage::StorageBackend;
use todo_cli::storage::json_file::JsonFileStorage;

#[test]
fn persisted_task_uses_the_documented_field_set() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonFileStorage::at(dir.path().join("tasks.json")).expect("storage");
    storage
        .add_task(&Task::new(7, "format check".to_string(), None))
        .expect("add");

    let raw = std::fs::read_to_string(storage.file_path()).expect("read");
    let parsed: Value = serde_json::from_str(&raw).expect("valid json");
    let entry = parsed
        .as_array()
        .and_then(|a| a.first())
        .expect("one entry");

    assert_eq!(entry.get("id"), Some(&json!(7)));
    assert_eq!(entry.get("title"), Some(&json!("format check")));
    assert_eq!(entry.get("description"), Some(&Value::Null));
    assert_eq!(entry.get("status"), Some(&json!("open")));
    assert!(entry.get("created_at").and_then(Value::as_str).is_some());
    assert_eq!(entry.get("completed_at"), Some(&Value::Null));
}

#[test]
fn completed_status_uses_the_completed_label() {
    let mut task = Task::new(1, "done".to_string(), None);
    task.status = TaskStatus::Completed;
    task.completed_at = Some(chrono::Utc::now());

    let value = serde_json::to_value(&task).expect("serialize");
    assert_eq!(value.get("status"), Some(&json!("completed")));
    assert!(value.get("completed_at").and_then(Value::as_str).is_some());
}

#[test]
fn files_written_by_older_versions_without_completed_at_still_parse() {
    // `completed_at` carries #[serde(default)], so its absence means None.
    let legacy = json!([{
        "id": 3,
        "title": "legacy",
        "description": "from an old file",
        "status": "open",
        "created_at": "2024-01-01T00:00:00Z"
    }]);

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, serde_json::to_string(&legacy).expect("serialize")).expect("write");

    let storage = JsonFileStorage::at(&path).expect("storage");
    let tasks = storage.list_tasks().expect("list");
    assert_eq!(tasks.len(), 1);
    let task = tasks.first().expect("present");
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.completed_at.is_none());
}
