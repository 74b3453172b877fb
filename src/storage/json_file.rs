// src/storage/json_file.rs

use crate::core::paths;
use crate::models::{ParamSpec, Task};
use crate::storage::{StorageBackend, StorageResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Parameter schema declared by the JSON file backend.
pub const PARAMETERS: &[ParamSpec] = &[ParamSpec::text("path")];

/// Task storage backed by a single flat JSON file.
///
/// Every mutation materializes the full collection in memory, applies the
/// change, and rewrites the whole file. There is deliberately no append-only
/// or incremental-write path: for a low-volume personal tool the full rewrite
/// keeps the file format trivial, and its behavior under a crash mid-write is
/// a known quantity. Do not "optimize" this without revisiting that tradeoff.
///
/// The backing file is exclusively owned by this instance; the design assumes
/// a single process and provides no file locking.
#[derive(Debug)]
pub struct JsonFileStorage {
    file_path: PathBuf,
}

impl JsonFileStorage {
    /// Creates the backend from its parameter sub-document.
    ///
    /// A missing or null `path` falls back to the default location
    /// (`~/.todo/tasks.json`). Parent directories are created and an absent
    /// file is initialized to an empty collection (`[]`).
    pub fn from_params(params: &Map<String, Value>) -> StorageResult<Self> {
        let file_path = match params.get("path") {
            Some(Value::String(p)) => PathBuf::from(p),
            _ => paths::default_tasks_path()?,
        };
        let storage = Self { file_path };
        storage.ensure_file_exists()?;
        Ok(storage)
    }

    /// Creates the backend directly over a known file path. Used by tests and
    /// tooling that bypass the configuration layer.
    pub fn at(file_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let storage = Self {
            file_path: file_path.into(),
        };
        storage.ensure_file_exists()?;
        Ok(storage)
    }

    /// The path of the backing file.
    pub fn file_path(&self) -> &std::path::Path {
        &self.file_path
    }

    fn ensure_file_exists(&self) -> StorageResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !self.file_path.exists() {
            log::debug!(
                "Task file '{}' does not exist. Initializing it empty.",
                self.file_path.display()
            );
            fs::write(&self.file_path, "[]")?;
        }
        Ok(())
    }

    fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        let content = fs::read_to_string(&self.file_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

impl StorageBackend for JsonFileStorage {
    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    fn add_task(&self, task: &Task) -> StorageResult<()> {
        let mut tasks = self.load_tasks()?;
        tasks.push(task.clone());
        self.save_tasks(&tasks)
    }

    fn get_task(&self, id: u64) -> StorageResult<Option<Task>> {
        let tasks = self.load_tasks()?;
        Ok(tasks.into_iter().find(|t| t.id == id))
    }

    fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        self.load_tasks()
    }

    fn update_task(&self, task: &Task) -> StorageResult<()> {
        let mut tasks = self.load_tasks()?;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                self.save_tasks(&tasks)
            }
            None => Err(crate::storage::StorageError::TaskNotFound { id: task.id }),
        }
    }

    fn delete_task(&self, id: u64) -> StorageResult<()> {
        let mut tasks = self.load_tasks()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(crate::storage::StorageError::TaskNotFound { id });
        }
        self.save_tasks(&tasks)
    }
}
