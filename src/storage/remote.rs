// src/storage/remote.rs

use crate::models::{ParamSpec, Task};
use crate::storage::{StorageBackend, StorageError, StorageResult};
use serde_json::{Map, Value};

/// Parameter schema the remote backend would require once implemented.
pub const PARAMETERS: &[ParamSpec] = &[ParamSpec::text("base_url"), ParamSpec::text("api_key")];

const BACKEND_NAME: &str = "remote";

/// Placeholder backend for a future remote task API.
///
/// It exists to show that the `StorageBackend` contract is not tied to local
/// files; every operation fails with `NotImplemented`. It is intentionally not
/// registered in the backend registry, so it cannot be selected from a config
/// file.
#[derive(Debug)]
pub struct RemoteApiStorage {
    base_url: String,
}

impl RemoteApiStorage {
    pub fn from_params(params: &Map<String, Value>) -> Self {
        let base_url = match params.get("base_url") {
            Some(Value::String(url)) => url.trim_end_matches('/').to_string(),
            _ => String::new(),
        };
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn unimplemented<T>(&self) -> StorageResult<T> {
        Err(StorageError::NotImplemented {
            backend: BACKEND_NAME,
        })
    }
}

impl StorageBackend for RemoteApiStorage {
    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    fn add_task(&self, _task: &Task) -> StorageResult<()> {
        self.unimplemented()
    }

    fn get_task(&self, _id: u64) -> StorageResult<Option<Task>> {
        self.unimplemented()
    }

    fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        self.unimplemented()
    }

    fn update_task(&self, _task: &Task) -> StorageResult<()> {
        self.unimplemented()
    }

    fn delete_task(&self, _id: u64) -> StorageResult<()> {
        self.unimplemented()
    }
}
