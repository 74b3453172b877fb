// src/core/service.rs

use crate::models::{Task, TaskStatus};
use crate::storage::{StorageBackend, StorageError, StorageResult};
use chrono::Utc;
use uuid::Uuid;

/// Generates a collision-negligible random task id.
///
/// Draws 64 bits from a v4 UUID. For a personal task list the birthday bound
/// on a 64-bit space makes collisions a non-concern, and the service performs
/// no duplicate check on insert.
fn generate_task_id() -> u64 {
    let bytes = Uuid::new_v4().into_bytes();
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(raw)
}

/// Business rules over a storage backend: id generation, status transitions,
/// and timestamping. Persistence is always delegated to the backend; the
/// service never touches the backing file itself.
pub struct TodoService {
    storage: Box<dyn StorageBackend>,
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoService").finish_non_exhaustive()
    }
}

impl TodoService {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Creates and persists a new pending task, returning it.
    pub fn create_task(&self, title: String, description: Option<String>) -> StorageResult<Task> {
        let task = Task::new(generate_task_id(), title, description);
        log::debug!("Creating task {} ('{}').", task.id, task.title);
        self.storage.add_task(&task)?;
        Ok(task)
    }

    /// Retrieves a task by id; absence is `Ok(None)`.
    pub fn get_task(&self, id: u64) -> StorageResult<Option<Task>> {
        self.storage.get_task(id)
    }

    /// Lists all tasks in insertion order.
    pub fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        self.storage.list_tasks()
    }

    /// Marks a task as completed, stamping `completed_at` with the transition
    /// time, and persists the change.
    ///
    /// Completing an already-completed task is allowed and re-stamps
    /// `completed_at`; the status itself is idempotent.
    pub fn complete_task(&self, id: u64) -> StorageResult<Task> {
        let mut task = self
            .storage
            .get_task(id)?
            .ok_or(StorageError::TaskNotFound { id })?;

        task.status = TaskStatus::Completed;
        task.completed_at = Some(Utc::now());
        self.storage.update_task(&task)?;
        log::info!("Task {} marked as completed.", id);
        Ok(task)
    }

    /// Deletes a task by id, propagating `TaskNotFound` from the backend.
    pub fn delete_task(&self, id: u64) -> StorageResult<()> {
        self.storage.delete_task(id)
    }
}
