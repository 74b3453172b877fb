//! Integration tests for the configuration store: default creation, backend
//! selection, shallow merge, and schema validation.

use serde_json::{Map, Value, json};
use tempfile::tempdir;
use todo_cli::core::config_manager::{ConfigError, ConfigManager};
use todo_cli::models::{ConfigDocument, UseSection};

fn manager_in_tempdir() -> (tempfile::TempDir, ConfigManager) {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::at(dir.path().join("config.json"));
    (dir, manager)
}

fn json_candidate(path: &str) -> ConfigDocument {
    let mut backends = Map::new();
    backends.insert("json".to_string(), json!({ "path": path }));
    ConfigDocument {
        active: UseSection {
            storage: "json".to_string(),
        },
        backends,
    }
}

#[test]
fn first_load_creates_default_document() {
    let (_dir, manager) = manager_in_tempdir();
    assert!(!manager.config_path().exists());

    let config = manager.load_config().expect("load");
    assert!(manager.config_path().exists());
    assert_eq!(config.active.storage, "json");
    assert!(config.backend_params("json").contains_key("path"));
}

#[test]
fn ensure_config_exists_is_idempotent() {
    let (_dir, manager) = manager_in_tempdir();
    manager.ensure_config_exists().expect("first");
    let before = std::fs::read_to_string(manager.config_path()).expect("read");
    manager.ensure_config_exists().expect("second");
    let after = std::fs::read_to_string(manager.config_path()).expect("read");
    assert_eq!(before, after);
}

#[test]
fn malformed_config_surfaces_parse_error() {
    let (_dir, manager) = manager_in_tempdir();
    std::fs::write(manager.config_path(), "{ definitely not json").expect("write");
    let err = manager.load_config().expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn get_storage_builds_the_configured_json_backend() {
    let (dir, manager) = manager_in_tempdir();
    let tasks_path = dir.path().join("tasks.json");
    manager
        .update_config(&json_candidate(&tasks_path.display().to_string()))
        .expect("update");

    let storage = manager.get_storage().expect("get_storage");
    assert!(tasks_path.exists());
    assert_eq!(storage.list_tasks().expect("list").len(), 0);
}

#[test]
fn get_storage_rejects_unregistered_backend_naming_valid_set() {
    let (_dir, manager) = manager_in_tempdir();
    let doc = json!({
        "use": { "storage": "sqlite" },
        "sqlite": { "path": "/tmp/db.sqlite" }
    });
    std::fs::write(
        manager.config_path(),
        serde_json::to_string_pretty(&doc).expect("serialize"),
    )
    .expect("write");

    let err = manager.get_storage().expect_err("must fail");
    match err {
        ConfigError::UnsupportedBackend {
            requested,
            available,
        } => {
            assert_eq!(requested, "sqlite");
            assert_eq!(available, "json");
        }
        other => panic!("expected UnsupportedBackend, got: {other}"),
    }
}

#[test]
fn update_config_preserves_unrelated_top_level_keys() {
    let (dir, manager) = manager_in_tempdir();

    // Seed a config carrying settings for a backend this build doesn't know.
    let seeded = json!({
        "use": { "storage": "json" },
        "json": { "path": dir.path().join("old.json").display().to_string() },
        "sqlite": { "path": "/tmp/db.sqlite", "busy_timeout": 5000 }
    });
    std::fs::write(
        manager.config_path(),
        serde_json::to_string_pretty(&seeded).expect("serialize"),
    )
    .expect("write");

    let new_path = dir.path().join("new.json").display().to_string();
    manager
        .update_config(&json_candidate(&new_path))
        .expect("update");

    let merged = manager.load_config().expect("load");
    assert_eq!(
        merged.backend_params("json").get("path"),
        Some(&Value::String(new_path))
    );
    let sqlite = merged.backend_params("sqlite");
    assert_eq!(sqlite.get("busy_timeout"), Some(&json!(5000)));
}

#[test]
fn validation_failure_aborts_update_without_writing() {
    let (_dir, manager) = manager_in_tempdir();
    manager.ensure_config_exists().expect("ensure");
    let before = std::fs::read_to_string(manager.config_path()).expect("read");

    // Candidate missing the required `path` key.
    let mut backends = Map::new();
    backends.insert("json".to_string(), json!({}));
    let candidate = ConfigDocument {
        active: UseSection {
            storage: "json".to_string(),
        },
        backends,
    };

    let err = manager.update_config(&candidate).expect_err("must fail");
    match err {
        ConfigError::SchemaMismatch {
            backend, missing, ..
        } => {
            assert_eq!(backend, "json");
            assert_eq!(missing, "path");
        }
        other => panic!("expected SchemaMismatch, got: {other}"),
    }

    let after = std::fs::read_to_string(manager.config_path()).expect("read");
    assert_eq!(before, after);
}

#[test]
fn validation_rejects_unexpected_keys_too() {
    let (_dir, manager) = manager_in_tempdir();
    let mut backends = Map::new();
    backends.insert(
        "json".to_string(),
        json!({ "path": "/tmp/x.json", "compression": true }),
    );
    let candidate = ConfigDocument {
        active: UseSection {
            storage: "json".to_string(),
        },
        backends,
    };

    let err = manager
        .validate_storage_config(&candidate)
        .expect_err("must fail");
    match err {
        ConfigError::SchemaMismatch { unexpected, .. } => {
            assert_eq!(unexpected, "compression");
        }
        other => panic!("expected SchemaMismatch, got: {other}"),
    }
}

#[test]
fn validation_rejects_unregistered_candidate_backend() {
    let (_dir, manager) = manager_in_tempdir();
    let mut backends = Map::new();
    backends.insert("redis".to_string(), json!({ "url": "redis://localhost" }));
    let candidate = ConfigDocument {
        active: UseSection {
            storage: "redis".to_string(),
        },
        backends,
    };

    let err = manager
        .validate_storage_config(&candidate)
        .expect_err("must fail");
    assert!(matches!(err, ConfigError::UnsupportedBackend { .. }));
}

#[test]
fn get_config_returns_empty_map_for_absent_backend() {
    let (_dir, manager) = manager_in_tempdir();
    let params = manager.get_config("redis").expect("get_config");
    assert!(params.is_empty());
}
