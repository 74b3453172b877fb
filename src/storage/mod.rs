// src/storage/mod.rs

pub mod json_file;
pub mod remote;

use crate::models::{ParamSpec, Task};
use thiserror::Error;

/// Represents errors that can occur inside a storage backend.
///
/// These propagate unchanged through the service layer to the caller; there is
/// no retry logic anywhere, since every operation is a local, deterministic
/// file read or write.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A filesystem I/O error occurred.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// The task collection file contains malformed JSON.
    #[error("Failed to parse task file: {0}")]
    Parse(#[from] serde_json::Error),
    /// An error occurred resolving a filesystem path (e.g. no home directory).
    #[error("Path error: {0}")]
    Path(#[from] crate::core::paths::PathError),
    /// No task with the given id exists in the collection.
    #[error("Task with id '{id}' not found.")]
    TaskNotFound {
        /// The id that was not found.
        id: u64,
    },
    /// The backend exists to demonstrate the contract but has no working
    /// implementation yet.
    #[error("The '{backend}' backend is not implemented yet.")]
    NotImplemented {
        /// Identifier of the unimplemented backend.
        backend: &'static str,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Capability contract for task storage backends.
///
/// Implementations own their backing store's lifecycle entirely; callers never
/// touch the persistence mechanism directly. Absence of a task is an error for
/// the mutating operations (`update_task`, `delete_task`) but a plain
/// `Ok(None)` for `get_task`.
pub trait StorageBackend: std::fmt::Debug {
    /// Returns the exact set of configuration parameters this backend
    /// requires. Pure, performs no I/O.
    fn parameters(&self) -> &'static [ParamSpec];

    /// Adds a new task to storage. This layer performs no duplicate-id check;
    /// id uniqueness is the caller's responsibility.
    fn add_task(&self, task: &Task) -> StorageResult<()>;

    /// Retrieves a task by id, or `None` if no task matches.
    fn get_task(&self, id: u64) -> StorageResult<Option<Task>>;

    /// Lists all tasks in insertion order.
    fn list_tasks(&self) -> StorageResult<Vec<Task>>;

    /// Replaces the stored task with the same id.
    fn update_task(&self, task: &Task) -> StorageResult<()>;

    /// Removes the task with the given id.
    fn delete_task(&self, id: u64) -> StorageResult<()>;
}
