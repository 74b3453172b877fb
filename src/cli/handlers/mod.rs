// src/cli/handlers/mod.rs

pub mod add;
pub mod complete;
pub mod config;
pub mod delete;
pub mod list;

use crate::core::config_manager::ConfigManager;
use crate::core::service::TodoService;
use anyhow::Result;

/// Builds a `TodoService` over the backend selected by the config file.
/// Every task subcommand goes through here.
pub fn build_service() -> Result<TodoService> {
    let manager = ConfigManager::default_location()?;
    let storage = manager.get_storage()?;
    Ok(TodoService::new(storage))
}
