//! A small personal task tracker with pluggable, file-backed storage.
//!
//! State lives in two flat JSON files under `~/.todo/`: a task collection and
//! a configuration document naming the active storage backend. The crate is
//! single-process and synchronous; neither file is locked, so concurrent
//! external writers are explicitly unsupported.

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod storage;

pub use crate::core::config_manager::{ConfigError, ConfigManager};
pub use crate::core::service::TodoService;
pub use crate::models::{ConfigDocument, Task, TaskStatus};
pub use crate::storage::{StorageBackend, StorageError};
